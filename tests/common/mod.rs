mod app;
mod factory;

pub use app::TestApp;
pub use factory::Factory;
