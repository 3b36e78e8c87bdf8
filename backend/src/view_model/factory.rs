use super::state::ClientsViewModel;
use crate::data::Repository;

/// Returns a constructor for view models bound to `repository`.
///
/// Every call of the returned closure yields an independent
/// `ClientsViewModel` with its own client list and worker, all sharing the
/// same store.
pub fn view_model_factory(repository: Repository) -> impl Fn() -> ClientsViewModel {
    move || ClientsViewModel::new(repository.clone())
}
