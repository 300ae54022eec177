pub mod presenter;
pub mod startup;

pub use presenter::ConsolePresenter;
