//! Interaction state for one radial dial.
//!
//! A dial tracks at most one contact at a time. A contact that starts inside
//! the origin circle arms the dial; once it reaches the handle (and is at
//! least as far out as the handle already is) the handle is grabbed and
//! follows the contact until release. Transitions are deterministic functions
//! of the current state and an incoming contact, with no platform types
//! involved, so they are tested natively.

use glam::DVec2;

use crate::constants::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_RADIUS, DEFAULT_RGB};
use crate::geom;
use crate::space::Viewport;
use crate::value;

/// Identity of the contact driving an interaction. Mice carry no
/// multi-contact identity, so they share a single sentinel variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactId {
    Mouse,
    Touch(i32),
}

/// One contact point of an input event, positioned in canvas-relative CSS
/// pixels.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    pub id: ContactId,
    pub position: DVec2,
}

impl Contact {
    pub fn new(id: ContactId, position: DVec2) -> Self {
        Self { id, position }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// A contact started inside the origin circle but has not picked up the
    /// handle yet.
    Armed,
    /// The handle follows the tracked contact directly.
    Grabbed,
}

/// Mutable dial configuration.
#[derive(Clone, Copy, Debug)]
pub struct DialParams {
    /// Origin hit-circle radius, CSS px.
    pub radius: f64,
    /// Widget color.
    pub rgb: [u8; 3],
    /// Output range.
    pub min: f64,
    pub max: f64,
}

impl Default for DialParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            rgb: DEFAULT_RGB,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

/// Core state of one dial: anchor, handle, tracked contact and configuration.
///
/// `origin` and `extent` live in the normalized unit square so they survive
/// resizes; hit tests and value derivation happen in canvas pixels.
pub struct RadialSlider {
    origin: DVec2,
    extent: DVec2,
    viewport: Viewport,
    pub params: DialParams,
    active: Option<ContactId>,
    grabbed: bool,
}

impl RadialSlider {
    pub fn new(origin: DVec2, viewport: Viewport, params: DialParams) -> Self {
        Self {
            origin,
            extent: origin,
            viewport,
            params,
            active: None,
            grabbed: false,
        }
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    #[inline]
    pub fn extent(&self) -> DVec2 {
        self.extent
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn origin_px(&self) -> DVec2 {
        self.viewport.denormalize(self.origin)
    }

    #[inline]
    pub fn extent_px(&self) -> DVec2 {
        self.viewport.denormalize(self.extent)
    }

    /// Largest on-screen drag distance, CSS px.
    #[inline]
    pub fn range_px(&self) -> f64 {
        self.viewport.half_min()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[inline]
    pub fn active_contact(&self) -> Option<ContactId> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        match (self.active, self.grabbed) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Armed,
            (Some(_), true) => Phase::Grabbed,
        }
    }

    /// Swap in new canvas dimensions. Normalized state carries over, so this
    /// is safe to call repeatedly.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// True when `position` (canvas px) lies within the origin hit circle.
    #[inline]
    pub fn hits_origin(&self, position: DVec2) -> bool {
        position.distance(self.origin_px()) <= self.params.radius
    }

    /// Begin tracking the first listed contact that starts inside the origin
    /// circle. Ignored while an interaction is already underway. Returns true
    /// when a contact was claimed.
    pub fn contact_start(&mut self, contacts: &[Contact]) -> bool {
        if self.active.is_some() {
            return false;
        }
        match contacts.iter().find(|c| self.hits_origin(c.position)) {
            Some(contact) => {
                self.active = Some(contact.id);
                true
            }
            None => false,
        }
    }

    /// Advance the interaction for one contact. Contacts other than the
    /// tracked one have no effect. Returns true when the event was consumed.
    pub fn contact_move(&mut self, contact: Contact) -> bool {
        if self.active != Some(contact.id) {
            return false;
        }
        if self.grabbed {
            self.follow(contact.position);
        } else if self.grab_test(contact.position) {
            self.grabbed = true;
        }
        true
    }

    /// Release the interaction if `id` is the tracked contact, wherever the
    /// release lands on screen. The extent is left where it was; idle renders
    /// simply stop showing it. Returns true when the dial went idle.
    pub fn contact_end(&mut self, id: ContactId) -> bool {
        if self.active != Some(id) {
            return false;
        }
        self.active = None;
        self.grabbed = false;
        true
    }

    // The handle is picked up once the contact reaches it AND sits at least
    // as far from the origin as the handle itself. The second test keeps a
    // contact that merely brushes past the handle on its way out from
    // grabbing it.
    fn grab_test(&self, position: DVec2) -> bool {
        let origin = self.origin_px();
        let extent = self.extent_px();
        let inside_extent = position.distance(extent) <= self.params.radius;
        let beyond_center = position.distance(origin) >= extent.distance(origin);
        inside_extent && beyond_center
    }

    // Track the contact directly, constrained to the on-screen disk and then
    // to the unit square.
    fn follow(&mut self, position: DVec2) {
        let constrained = geom::clamp_to_disk(position, self.origin_px(), self.range_px());
        self.extent = self
            .viewport
            .normalize(constrained)
            .clamp(DVec2::ZERO, DVec2::ONE);
    }

    /// Handle displacement as a fraction of the on-screen range, saturating
    /// at 1.
    pub fn value_norm(&self) -> f64 {
        (self.origin_px().distance(self.extent_px()) / self.range_px()).min(1.0)
    }

    /// Current output value within [min, max].
    pub fn value(&self) -> f64 {
        value::scale(self.value_norm(), self.params.min, self.params.max)
    }

    /// Output value formatted at the range-derived precision.
    pub fn value_text(&self) -> String {
        value::format_value(self.value(), self.params.min, self.params.max)
    }
}
