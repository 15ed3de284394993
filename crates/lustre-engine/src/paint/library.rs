use std::fmt;

use super::gradient::{GradientStop, GradientStopSet};

/// Number of user-editable custom gradient slots.
pub const CUSTOM_GRADIENT_SLOTS: usize = 16;

/// Border treatment a gradient asks the drawing layer for.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum GradientBorder {
    None,
    Light,
    #[default]
    ThreeD,
    ThreeDFull,
    Shine,
}

impl GradientBorder {
    pub const ALL: [GradientBorder; 5] = [
        GradientBorder::None,
        GradientBorder::Light,
        GradientBorder::ThreeD,
        GradientBorder::ThreeDFull,
        GradientBorder::Shine,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            GradientBorder::None => "none",
            GradientBorder::Light => "light",
            GradientBorder::ThreeD => "3d",
            GradientBorder::ThreeDFull => "3dfull",
            GradientBorder::Shine => "shine",
        }
    }

    /// Case-insensitive lookup of [`as_str`](Self::as_str) names.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|b| b.as_str().eq_ignore_ascii_case(name))
    }
}

/// Index of a custom gradient slot.
///
/// Slots are numbered from 1 in user-facing names (`custom1`); the wrapped
/// value is the zero-based index, always below [`CUSTOM_GRADIENT_SLOTS`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomSlot(u8);

impl CustomSlot {
    /// Slot from its 1-based user number.
    pub fn from_number(number: usize) -> Option<Self> {
        (1..=CUSTOM_GRADIENT_SLOTS)
            .contains(&number)
            .then(|| CustomSlot((number - 1) as u8))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    pub fn all() -> impl Iterator<Item = CustomSlot> {
        (0..CUSTOM_GRADIENT_SLOTS as u8).map(CustomSlot)
    }
}

impl fmt::Display for CustomSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "custom{}", self.number())
    }
}

/// A user-defined gradient: stop curve plus border style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomGradient {
    pub border: GradientBorder,
    pub stops: GradientStopSet,
}

impl CustomGradient {
    pub fn new(border: GradientBorder, stops: GradientStopSet) -> Self {
        Self { border, stops }
    }

    /// A slot with no stops has not been configured.
    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.stops.is_empty()
    }
}

/// The editable gradient library: one [`CustomGradient`] per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLibrary {
    slots: [CustomGradient; CUSTOM_GRADIENT_SLOTS],
}

impl Default for GradientLibrary {
    fn default() -> Self {
        Self { slots: std::array::from_fn(|_| CustomGradient::default()) }
    }
}

impl GradientLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, slot: CustomSlot) -> &CustomGradient {
        &self.slots[slot.index()]
    }

    /// Replaces a slot. Returns whether its content changed.
    pub fn set(&mut self, slot: CustomSlot, gradient: CustomGradient) -> bool {
        let current = &mut self.slots[slot.index()];
        if *current == gradient {
            return false;
        }
        *current = gradient;
        true
    }

    /// Sets the border style of a slot. Returns whether it changed.
    pub fn set_border(&mut self, slot: CustomSlot, border: GradientBorder) -> bool {
        let current = &mut self.slots[slot.index()].border;
        let changed = *current != border;
        *current = border;
        changed
    }

    pub fn add_stop(&mut self, slot: CustomSlot, pos: f64, value: f64) -> bool {
        self.slots[slot.index()].stops.insert(pos, value)
    }

    pub fn remove_stop(&mut self, slot: CustomSlot, pos: f64, value: f64) -> bool {
        self.slots[slot.index()].stops.remove(pos, value)
    }

    pub fn update_stop(
        &mut self,
        slot: CustomSlot,
        old_pos: f64,
        old_value: f64,
        new_pos: f64,
        new_value: f64,
    ) -> bool {
        self.slots[slot.index()].stops.update(old_pos, old_value, new_pos, new_value)
    }

    /// Stops of a slot in ascending position order.
    #[inline]
    pub fn list_stops(&self, slot: CustomSlot) -> &[GradientStop] {
        self.slots[slot.index()].stops.as_slice()
    }

    /// Iterates the slots that have at least one stop.
    pub fn defined(&self) -> impl Iterator<Item = (CustomSlot, &CustomGradient)> {
        CustomSlot::all()
            .map(|slot| (slot, self.get(slot)))
            .filter(|(_, g)| g.is_defined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: usize) -> CustomSlot {
        CustomSlot::from_number(n).unwrap()
    }

    #[test]
    fn slot_numbers_are_one_based() {
        assert!(CustomSlot::from_number(0).is_none());
        assert!(CustomSlot::from_number(CUSTOM_GRADIENT_SLOTS + 1).is_none());
        let s = slot(3);
        assert_eq!(s.index(), 2);
        assert_eq!(s.number(), 3);
        assert_eq!(s.to_string(), "custom3");
        assert_eq!(CustomSlot::all().count(), CUSTOM_GRADIENT_SLOTS);
    }

    #[test]
    fn border_names_round_trip() {
        for b in GradientBorder::ALL {
            assert_eq!(GradientBorder::from_name(b.as_str()), Some(b));
        }
        assert_eq!(GradientBorder::from_name("3D"), Some(GradientBorder::ThreeD));
        assert_eq!(GradientBorder::from_name("bogus"), None);
    }

    #[test]
    fn editing_a_slot_leaves_others_alone() {
        let mut lib = GradientLibrary::new();
        assert!(lib.add_stop(slot(1), 0.0, 1.2));
        assert!(lib.add_stop(slot(1), 1.0, 0.9));
        assert!(lib.update_stop(slot(1), 1.0, 0.9, 1.0, 0.8));
        assert_eq!(lib.list_stops(slot(1)).len(), 2);
        assert!(lib.list_stops(slot(2)).is_empty());

        let defined: Vec<CustomSlot> = lib.defined().map(|(s, _)| s).collect();
        assert_eq!(defined, vec![slot(1)]);

        assert!(lib.remove_stop(slot(1), 0.0, 1.2));
        assert!(!lib.remove_stop(slot(1), 0.0, 1.2));
    }

    #[test]
    fn set_reports_changes() {
        let mut lib = GradientLibrary::new();
        let g = CustomGradient::new(
            GradientBorder::Light,
            GradientStopSet::from_pairs([(0.0, 1.1)]),
        );
        assert!(lib.set(slot(5), g.clone()));
        assert!(!lib.set(slot(5), g));
        assert!(!lib.set_border(slot(5), GradientBorder::Light));
        assert!(lib.set_border(slot(5), GradientBorder::Shine));
    }
}
