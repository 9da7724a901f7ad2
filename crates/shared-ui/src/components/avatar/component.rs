use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "portal-avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "portal-avatar-fallback",
        None,
        false,
    ));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Avatar showing `src` when it loads and `initials` otherwise.
#[component]
pub fn UserAvatar(
    #[props(default)] src: Option<String>,
    initials: String,
    #[props(default = false)] large: bool,
) -> Element {
    rsx! {
        div { class: if large { "portal-avatar-frame large" } else { "portal-avatar-frame" },
            Avatar {
                if let Some(url) = src {
                    AvatarImage { src: url }
                }
                AvatarFallback { "{initials}" }
            }
        }
    }
}
