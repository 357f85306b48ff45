//! Newtype wrappers for displaying lists of domain objects.
//!
//! Each wrapper prints its items with their own `Display` and a fixed
//! sentence when the list is empty. None of them print a title, so callers
//! can put their own heading above.

use std::{fmt, ops::Index};

use crate::models::{Appliance, ChildSafeMoment, Conflict, Step, StorageLocation};

macro_rules! display_list {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for item in &self.0 {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    };
}

display_list!(
    /// Steps in the order given.
    ///
    /// ```rust
    /// use batchcook_core::{display::Steps, Step};
    ///
    /// let steps = Steps(vec![Step::new("Rinse lentils", 5)]);
    /// assert!(steps.to_string().contains("Rinse lentils (5 min)"));
    /// assert_eq!(Steps(vec![]).to_string(), "No steps found.\n");
    /// ```
    Steps,
    Step,
    "No steps found."
);

display_list!(
    /// Appliance conflicts found by the audit.
    Conflicts,
    Conflict,
    "No appliance conflicts."
);

display_list!(
    /// Child-safe moments.
    Moments,
    ChildSafeMoment,
    "No child-safe moments in this session."
);

display_list!(
    /// Appliance registry entries.
    Appliances,
    Appliance,
    "No appliances configured."
);

display_list!(
    /// Storage location registry entries.
    StorageLocations,
    StorageLocation,
    "No storage locations configured."
);
