use crate::templates::styles::stylesheet;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Basic HTML error page.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style { (PreEscaped(stylesheet())) }
            }
            body {
                main class="catalog" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to the catalog" } }
                }
            }
        }
    }
}
