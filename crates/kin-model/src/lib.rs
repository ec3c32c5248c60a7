mod ids;
pub use ids::AppId;
pub use ids::RecordId;

mod record;
pub use record::FieldValue;
pub use record::Record;

mod query;
pub use query::RecordQuery;

mod app;
pub use app::AppInfo;

mod form;
pub use form::FieldProperty;

mod view;
pub use view::ViewInfo;

/// Record revision as returned by the platform.
///
/// The wire format carries revisions as decimal strings, not numbers.
pub type Revision = String;
