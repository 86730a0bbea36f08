//! Attaches abstract render trees to the page.

use wortteiler::RenderNode;
use yew::prelude::*;
use yew::virtual_dom::{VTag, VText};

/// Build live virtual DOM for a [`RenderNode`].
pub fn to_html(node: &RenderNode) -> Html {
    match node {
        RenderNode::Text(text) => VText::new(text.clone()).into(),
        RenderNode::Element(element) => {
            let mut tag = VTag::new(element.tag);
            for (name, value) in &element.attrs {
                tag.add_attribute(*name, value.clone());
            }
            for child in &element.children {
                tag.add_child(to_html(child));
            }
            tag.into()
        }
    }
}
