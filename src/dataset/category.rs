/// Labels for a known category key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
	pub key: &'static str,
	/// Heading rendered above the category's table.
	pub display_name: &'static str,
	/// Compact label used by category selector tabs.
	pub tab_label: &'static str,
}

/// Fixed label table. Dataset keys outside this table render without a header.
pub const CATEGORIES: &[CategoryInfo] = &[
	CategoryInfo {
		key: "prescription",
		display_name: "Prescription Filling Directions",
		tab_label: "Prescription",
	},
	CategoryInfo {
		key: "quantities",
		display_name: "Quantities and Measurement",
		tab_label: "Quantities",
	},
	CategoryInfo {
		key: "patient",
		display_name: "Patient Instructions",
		tab_label: "Patient",
	},
	CategoryInfo {
		key: "medications",
		display_name: "Medications",
		tab_label: "Medications",
	},
	CategoryInfo {
		key: "clinical",
		display_name: "Clinical Conditions",
		tab_label: "Clinical",
	},
	CategoryInfo {
		key: "dosage",
		display_name: "Dosage Forms/Vehicles",
		tab_label: "Dosage",
	},
	CategoryInfo {
		key: "routes",
		display_name: "Routes of Administration",
		tab_label: "Routes",
	},
];

pub fn category_info(key: &str) -> Option<&'static CategoryInfo> {
	CATEGORIES.iter().find(|info| info.key == key)
}

/// Heading for a category key, if the key is known.
pub fn display_name(key: &str) -> Option<&'static str> {
	category_info(key).map(|info| info.display_name)
}

/// Tab label for a category key. Unknown keys are shown verbatim.
pub fn tab_label(key: &str) -> &str {
	category_info(key).map_or(key, |info| info.tab_label)
}
