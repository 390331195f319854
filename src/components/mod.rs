//! ECS components for entities.
//!
//! Components define the per-entity data of the scene: animal sprites, the
//! soundboard buttons, hit regions, and the pop animation.
//!
//! Submodules overview:
//! - [`animal`] – ties a sprite entity to its roster record
//! - [`clickarea`] – rectangular hit region for pointer picking
//! - [`dynamictext`] – text rendered with the built-in font
//! - [`pop`] – scale-pulse animation state
//! - [`scale`] – uniform draw scale for sprites
//! - [`screenposition`] – position in window pixels
//! - [`soundbutton`] – per-animal replay control
//! - [`sprite`] – textured quad with a pivot
//! - [`zindex`] – rendering order hint

pub mod animal;
pub mod clickarea;
pub mod dynamictext;
pub mod pop;
pub mod scale;
pub mod screenposition;
pub mod soundbutton;
pub mod sprite;
pub mod zindex;
