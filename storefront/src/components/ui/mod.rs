//! Small presentational widgets shared by pages.

mod badge;
mod button;
mod rating;
mod tabs;

pub use badge::{Badge, BadgeVariant};
pub use button::{button_class, ButtonSize, ButtonVariant};
pub use rating::{star_classes, RatingStars};
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
