use web_sys::Element;

/// Fresh `<div>` appended to the document body for a component to render into
pub fn mount_point() -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("test runs in a browser document");
    let root = document.create_element("div").expect("create mount point");
    document
        .body()
        .expect("document has a body")
        .append_child(&root)
        .expect("append mount point");
    root
}

/// Class attribute of the element matching `selector` under `root`
pub fn class_of(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("class"))
        .unwrap_or_default()
}
