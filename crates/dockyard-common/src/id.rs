/// Generate a widget id of the form `widget-<group>-<32 hex chars>`.
pub fn new_widget_id(group: &str) -> String {
    format!("widget-{group}-{}", uuid::Uuid::new_v4().simple())
}
