pub const ASSET_DIR: &str = "assets/Little-Lemon-Images";

/// Maps an image name from the menu API to a bundled asset file.
pub fn resolve_image(image: &str) -> Option<&'static str> {
    let file = match image {
        "greekSalad.jpg" => "Greek salad.png",
        "bruschetta.jpg" => "Bruschetta.png",
        "grilledFish.jpg" => "Grilled fish.png",
        "pasta.jpg" => "Pasta.png",
        "lemonDessert.jpg" => "Lemon dessert.png",
        _ => return None,
    };
    Some(file)
}

pub fn asset_path(image: &str) -> Option<String> {
    resolve_image(image).map(|file| format!("{ASSET_DIR}/{file}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_images_resolve() {
        assert_eq!(resolve_image("greekSalad.jpg"), Some("Greek salad.png"));
        assert_eq!(
            asset_path("lemonDessert.jpg").as_deref(),
            Some("assets/Little-Lemon-Images/Lemon dessert.png")
        );
    }

    #[test]
    fn unknown_images_have_no_asset() {
        assert_eq!(resolve_image("pizza.jpg"), None);
        assert_eq!(resolve_image("GreekSalad.jpg"), None);
        assert_eq!(asset_path(""), None);
    }
}
