use uuid::Uuid;

/// Generate a fresh item id.
///
/// Items keep their id for their whole lifetime, including across
/// save/reload, so ids must stay unique when new items are appended to a
/// previously persisted page. Random v4 ids satisfy that without any
/// per-document counter state.
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}
