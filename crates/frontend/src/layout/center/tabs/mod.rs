mod tabs;

pub use tabs::Tabs;
