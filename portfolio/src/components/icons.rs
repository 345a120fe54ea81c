//! Inline SVG icons (256×256 viewBox, filled, even-odd).

use leptos::prelude::*;

use crate::content::{LinkKind, SkillIcon};

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MENU size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path fill-rule="evenodd"></path>
        </svg>
    }
}

pub const ICON_MENU: &str = "M40,64H216V80H40Zm0,56H216v16H40Zm0,56H216v16H40Z";

pub const ICON_CLOSE: &str = "M61.66,50.34,128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128l66.35,66.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34Z";

pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

pub const ICON_STAR: &str = "M128,24l30.6,70.4L234,101l-57,50.6L193.6,226,128,187.2,62.4,226,79,151.6,22,101l75.4-6.6Z";

pub const ICON_ENVELOPE: &str = "M32,56H224a8,8,0,0,1,8,8V192a16,16,0,0,1-16,16H40a16,16,0,0,1-16-16V64A8,8,0,0,1,32,56Zm12.57,16L128,148.48,211.43,72ZM216,192V82.19l-82.59,75.7a8,8,0,0,1-10.82,0L40,82.19V192Z";

/// GitHub mark (GithubLogo)
pub const ICON_GITHUB: &str = "M208.31,75.68A59.78,59.78,0,0,0,202.93,28,8,8,0,0,0,196,24a59.75,59.75,0,0,0-48,24H124A59.75,59.75,0,0,0,76,24a8,8,0,0,0-6.93,4,59.78,59.78,0,0,0-5.38,47.68A58.14,58.14,0,0,0,56,104v8a56.06,56.06,0,0,0,48.44,55.47A39.8,39.8,0,0,0,96,192v8H72a24,24,0,0,1-24-24A40,40,0,0,0,8,136a8,8,0,0,0,0,16,24,24,0,0,1,24,24,40,40,0,0,0,40,40H96v16a8,8,0,0,0,16,0V192a24,24,0,0,1,48,0v40a8,8,0,0,0,16,0V192a39.8,39.8,0,0,0-8.44-24.53A56.06,56.06,0,0,0,216,112v-8A58.14,58.14,0,0,0,208.31,75.68ZM200,112a40,40,0,0,1-40,40H112a40,40,0,0,1-40-40v-8a41.74,41.74,0,0,1,6.9-22.48A8,8,0,0,0,80,73.83a43.81,43.81,0,0,1,.79-33.58,43.88,43.88,0,0,1,32.32,20.06A8,8,0,0,0,119.82,64h32.35a8,8,0,0,0,6.74-3.69,43.87,43.87,0,0,1,32.32-20.06A43.81,43.81,0,0,1,192,73.83a8.09,8.09,0,0,0,1,7.65A41.72,41.72,0,0,1,200,104Z";

pub const ICON_LINKEDIN: &str = "M216,24H40A16,16,0,0,0,24,40V216a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V40A16,16,0,0,0,216,24ZM96,176H80V112H96Zm-8-80a12,12,0,1,1,12-12A12,12,0,0,1,88,96Zm96,80H168V140a20,20,0,0,0-40,0v36H112V112h16v7.73A36,36,0,0,1,184,140Z";

pub const ICON_EXTERNAL_LINK: &str = "M224,104a8,8,0,0,1-16,0V59.32l-66.33,66.34a8,8,0,0,1-11.32-11.32L196.68,48H152a8,8,0,0,1,0-16h64a8,8,0,0,1,8,8Zm-40,24a8,8,0,0,0-8,8v72H48V80h72a8,8,0,0,0,0-16H48A16,16,0,0,0,32,80V208a16,16,0,0,0,16,16H176a16,16,0,0,0,16-16V136A8,8,0,0,0,184,128Z";

pub const ICON_CODE: &str = "M69.12,94.15,28.5,128l40.62,33.85a8,8,0,1,1-10.24,12.29l-48-40a8,8,0,0,1,0-12.29l48-40a8,8,0,0,1,10.24,12.3Zm176,27.7-48-40a8,8,0,1,0-10.24,12.3L227.5,128l-40.62,33.85a8,8,0,1,0,10.24,12.29l48-40a8,8,0,0,0,0-12.29ZM162.73,32.48a8,8,0,0,0-10.25,4.79l-64,176a8,8,0,0,0,4.79,10.26A8.14,8.14,0,0,0,96,224a8,8,0,0,0,7.52-5.27l64-176A8,8,0,0,0,162.73,32.48Z";

pub const ICON_DATABASE: &str = "M128,24C74.17,24,32,48.6,32,80v96c0,31.4,42.17,56,96,56s96-24.6,96-56V80C224,48.6,181.83,24,128,24Zm0,16c44.86,0,80,18.39,80,40s-35.14,40-80,40S48,101.61,48,80,83.14,40,128,40Zm80,136c0,21.61-35.14,40-80,40s-80-18.39-80-40V147.67C67.08,163.28,95.34,176,128,176s60.92-12.72,80-28.33Zm0-48c0,21.61-35.14,40-80,40s-80-18.39-80-40V99.67C67.08,115.28,95.34,128,128,128s60.92-12.72,80-28.33Z";

pub const fn link_icon(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Github => ICON_GITHUB,
        LinkKind::Linkedin => ICON_LINKEDIN,
        LinkKind::Mail => ICON_ENVELOPE,
    }
}

pub const fn skill_icon(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => ICON_CODE,
        SkillIcon::Database => ICON_DATABASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_kinds_map_to_distinct_icons() {
        assert_eq!(link_icon(LinkKind::Github), ICON_GITHUB);
        assert_ne!(link_icon(LinkKind::Github), link_icon(LinkKind::Mail));
        assert_ne!(link_icon(LinkKind::Github), link_icon(LinkKind::Linkedin));
    }

    #[test]
    fn github_icon_is_the_octocat_mark() {
        // silhouette starts at the right ear and closes with an inner outline
        assert!(ICON_GITHUB.starts_with("M208.31,75.68"));
        assert_eq!(ICON_GITHUB.matches('M').count(), 2);
    }
}
