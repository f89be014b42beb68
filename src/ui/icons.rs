pub struct Icons;

impl Icons {
    pub const CLIPBOARD: &str = "📋";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const POINTER: &str = "▶";
    pub const EMPTY: &str = "∅";
}
