/// A page node the effects can act on.
///
/// Implemented for `web_sys::HtmlElement` in `dom`, and by an in-memory
/// element in tests. Handles are cheap clones of the same underlying node.
pub trait Surface: Clone + 'static {
    fn data(&self, name: &str) -> Option<String>;
    fn set_data(&self, name: &str, value: &str);
    fn add_class(&self, class: &str);
    fn text(&self) -> String;
    fn show_text(&self, text: &str);
    /// An empty value removes the inline property.
    fn set_style(&self, property: &str, value: &str);
}
