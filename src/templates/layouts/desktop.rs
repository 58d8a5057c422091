use crate::domain::Variant;
use crate::templates::styles::stylesheet;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn desktop_layout(title: &str, active: Option<Variant>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(stylesheet())) }
            }
            body {
                header class="site-header" {
                    h2 { "Sole & Ankle" }
                    nav {
                        a href="/" class=[active.is_none().then_some("active")] { "All" }
                        @for variant in Variant::ALL {
                            a
                                href=(format!("/?variant={}", variant.as_str()))
                                class=[(active == Some(variant)).then_some("active")]
                            {
                                (nav_label(variant))
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}

fn nav_label(variant: Variant) -> &'static str {
    match variant {
        Variant::OnSale => "Sale",
        Variant::NewRelease => "New Releases",
        Variant::Default => "Regular",
    }
}
