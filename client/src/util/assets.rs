//! Logical image names mapped to the URLs the server exposes under `/assets`.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Images the dashboard displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    Logo,
    Camera(u8),
}

/// The four camera feeds in display order.
pub const CAMERAS: [Asset; 4] = [Asset::Camera(1), Asset::Camera(2), Asset::Camera(3), Asset::Camera(4)];

impl Asset {
    pub fn url(self) -> String {
        match self {
            Self::Logo => "/assets/logo.svg".to_owned(),
            Self::Camera(n) => format!("/assets/cam{n}.svg"),
        }
    }

    pub fn alt(self) -> String {
        match self {
            Self::Logo => "Logo".to_owned(),
            Self::Camera(n) => format!("Câmera {n}"),
        }
    }
}
