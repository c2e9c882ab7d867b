/// An image received from an admin, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Where an uploaded image ended up, plus the handle needed to delete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub url: String,
    pub public_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFolder {
    Profile,
    Hero,
    Gallery,
}

impl AssetFolder {
    pub fn name(&self) -> &'static str {
        match self {
            AssetFolder::Profile => "portfolio_profile",
            AssetFolder::Hero => "portfolio_hero",
            AssetFolder::Gallery => "portfolio_gallery",
        }
    }
}
