//! Fanny components
//!
//! Each component module exposes a props type with builder methods and an
//! accessor for its shared [`Component`](crate::factory::Component).

/// Builder methods for the common HTML props of a component that embeds
/// [`BoxProps`] as `html`
macro_rules! html_builders {
    () => {
        /// Caller class, kept in front of the generated one
        pub fn class_name(mut self, class_name: impl Into<fanny_style::ClassName>) -> Self {
            self.html.class_name = Some(class_name.into());
            self
        }

        pub fn id(mut self, id: impl Into<String>) -> Self {
            self.html.id = Some(id.into());
            self
        }

        /// Render as a different tag
        pub fn use_tag(mut self, tag: impl Into<String>) -> Self {
            self.html.use_tag = Some(tag.into());
            self
        }

        pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.html.attributes.insert(name.into(), value.into());
            self
        }

        pub fn child(mut self, child: impl Into<fanny_core::Node>) -> Self {
            self.html.children.push(child.into());
            self
        }
    };
}

pub mod box_;
pub mod button;
pub mod container;
pub mod icon;
pub mod navigation;
pub mod side_nav;

pub use box_::{block, box_, BoxProps};
pub use button::{button, ButtonProps};
pub use container::{container, ContainerProps};
pub use icon::{icon, IconDef, IconProps, IconSource};
pub use navigation::{navigation, NavigationProps};
pub use side_nav::{
    side_nav, side_nav_item, side_nav_level, SideNavChild, SideNavItemProps, SideNavLevelProps,
    SideNavProps, SideNavState,
};
