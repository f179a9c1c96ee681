//! TypeScript artifact generators, one module per generated file.

mod actions_ts;
mod form_tsx;
mod hook_ts;
mod list_tsx;
mod pages_tsx;
mod store_ts;
mod support_ts;
mod sync_hook_ts;
mod types_ts;
mod validation_ts;

pub use actions_ts::ActionsTs;
pub use form_tsx::FormTsx;
pub use hook_ts::HookTs;
pub use list_tsx::ListTsx;
pub use pages_tsx::{CreatePageTsx, DetailPageTsx, EditPageTsx, ListPageTsx};
pub use slicegen_core::GENERATED_HEADER;
pub use store_ts::StoreTs;
pub use support_ts::{ApiClientTs, AuthTs};
pub use sync_hook_ts::SyncHookTs;
pub use types_ts::TypesTs;
pub use validation_ts::ValidationTs;
