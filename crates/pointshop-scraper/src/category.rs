//! Fixed mapping from `community_item_class` codes to display metadata.
//!
//! One table drives the label, the Points Shop cluster page, and the image
//! host for each code. Codes missing from the table are not errors: they get
//! an empty label, the app's own Points Shop URL, and no image.

/// Base for the canonical per-app Points Shop page.
pub const POINTS_SHOP_APP_URL: &str = "https://store.steampowered.com/points/shop/app";

const COMMUNITY_ITEMS_HOST: &str =
    "https://cdn.akamai.steamstatic.com/steamcommunity/public/images/items";
const PROFILE_BACKGROUND_HOST: &str =
    "https://steamcommunity.com/economy/profilebackground/items";

/// Where a category's full-size image is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageHost {
    /// Avatars, frames, mini-profiles, stickers, emoticons.
    CommunityItems,
    /// Profile backgrounds live on the economy host instead of the CDN.
    ProfileBackground,
    /// Bundles reuse an existing image the API does not expose.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCategory {
    pub code: i32,
    pub label: &'static str,
    /// Cluster index on the app's Points Shop page.
    pub cluster: u8,
    pub image_host: ImageHost,
}

const CATEGORIES: &[ItemCategory] = &[
    ItemCategory {
        code: 15,
        label: "Animated Avatar",
        cluster: 2,
        image_host: ImageHost::CommunityItems,
    },
    ItemCategory {
        code: 14,
        label: "Avatar Frame",
        cluster: 3,
        image_host: ImageHost::CommunityItems,
    },
    ItemCategory {
        code: 13,
        label: "Mini-Profile",
        cluster: 4,
        image_host: ImageHost::CommunityItems,
    },
    ItemCategory {
        code: 11,
        label: "Animated Sticker",
        cluster: 6,
        image_host: ImageHost::CommunityItems,
    },
    ItemCategory {
        code: 3,
        label: "Profile Background",
        cluster: 5,
        image_host: ImageHost::ProfileBackground,
    },
    ItemCategory {
        code: 4,
        label: "Emoticon",
        cluster: 7,
        image_host: ImageHost::CommunityItems,
    },
    ItemCategory {
        code: 0,
        label: "Item Bundle",
        cluster: 0,
        image_host: ImageHost::None,
    },
];

/// Looks up the table entry for `code`.
#[must_use]
pub fn lookup(code: i32) -> Option<&'static ItemCategory> {
    CATEGORIES.iter().find(|c| c.code == code)
}

/// Canonical Points Shop page for an app, e.g. `.../points/shop/app/440`.
#[must_use]
pub fn points_shop_url(appid: &str) -> String {
    format!("{POINTS_SHOP_APP_URL}/{appid}")
}

/// Display fields derived from a category code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    pub item_type: String,
    pub points_shop_url: String,
    pub image_url: String,
}

/// Derives the label, cluster URL, and image URL for one item.
///
/// `app_url` is the owning app's canonical Points Shop URL; `image_file` is
/// the bare file name from `community_item_data.item_image_large`. A missing
/// code is handled like an unknown one.
#[must_use]
pub fn derive(code: Option<i32>, app_url: &str, appid: &str, image_file: &str) -> DerivedFields {
    let Some(category) = code.and_then(lookup) else {
        return DerivedFields {
            item_type: String::new(),
            points_shop_url: app_url.to_owned(),
            image_url: String::new(),
        };
    };

    let image_url = match category.image_host {
        _ if image_file.is_empty() => String::new(),
        ImageHost::CommunityItems => format!("{COMMUNITY_ITEMS_HOST}/{appid}/{image_file}"),
        ImageHost::ProfileBackground => format!("{PROFILE_BACKGROUND_HOST}/{appid}/{image_file}"),
        ImageHost::None => String::new(),
    };

    DerivedFields {
        item_type: category.label.to_owned(),
        points_shop_url: format!("{app_url}/cluster/{}", category.cluster),
        image_url,
    }
}
