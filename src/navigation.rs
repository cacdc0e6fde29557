//! The page header with the application brand and navigation links.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the header. It is highlighted when `is_current` is `true`.
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "pb-2 text-white border-b-2 border-orange-400"
        } else {
            "pb-2 text-white opacity-80 hover:opacity-100"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

pub struct Header<'a> {
    links: Vec<Link<'a>>,
}

impl Header<'_> {
    /// Get the header.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> Header<'_> {
        let links = vec![Link {
            url: endpoints::DASHBOARD_VIEW,
            title: "Listagem",
            is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
        }];

        Header { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            header class="bg-indigo-700 px-5 pt-8 pb-40"
            {
                div class="flex items-center justify-between mx-auto max-w-screen-xl"
                {
                    a href=(endpoints::ROOT) class="flex items-center text-2xl font-semibold text-white"
                    {
                        img class="w-8 h-8 mr-2" src="/static/logo.svg" alt="GoFinances";
                        "GoFinances"
                    }

                    nav class="flex gap-8"
                    {
                        @for link in self.links {
                            (link.into_html())
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::Header;

    #[test]
    fn marks_current_link() {
        let html = Html::parse_fragment(&Header::new(endpoints::DASHBOARD_VIEW).into_html().into_string());
        let link = html
            .select(&Selector::parse("nav a").unwrap())
            .next()
            .expect("No navigation link found");

        assert_eq!(link.value().attr("href"), Some(endpoints::DASHBOARD_VIEW));
        assert!(
            link.value()
                .attr("class")
                .unwrap_or_default()
                .contains("border-b-2"),
            "want current link to be underlined"
        );
    }
}
