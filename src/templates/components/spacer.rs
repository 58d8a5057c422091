use maud::{html, Markup};

/// Fixed-height vertical gap.
pub fn spacer(size: u16) -> Markup {
    html! {
        div class="spacer" style=(format!("display: block; height: {size}px; min-height: {size}px;")) {}
    }
}
