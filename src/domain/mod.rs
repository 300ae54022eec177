// Domain layer: canonical records, outcomes and the adapter/presenter ports.

pub mod model;
pub mod ports;
