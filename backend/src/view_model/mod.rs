mod factory;
mod intent;
mod state;
mod worker;

pub use factory::view_model_factory;
pub use state::ClientsViewModel;
