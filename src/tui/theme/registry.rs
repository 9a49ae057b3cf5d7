use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use log::warn;

use super::builtins;
use super::types::{Theme, ThemeRegistration};

#[derive(Debug)]
struct Entry {
	display_name: String,
	theme: Theme,
}

/// Themes keyed by lowercased name, plus an alias index.
#[derive(Debug, Default)]
struct Registry {
	themes: BTreeMap<String, Entry>,
	aliases: HashMap<String, String>,
}

impl Registry {
	fn from_registrations<I>(registrations: I) -> Self
	where
		I: IntoIterator<Item = ThemeRegistration>,
	{
		let mut registry = Self::default();
		for registration in registrations {
			registry.insert(registration);
		}
		registry
	}

	fn insert(&mut self, registration: ThemeRegistration) {
		let ThemeRegistration {
			name,
			theme,
			aliases,
		} = registration;
		let key = normalize_name(&name);
		if self.themes.contains_key(&key) {
			warn!("theme `{name}` is defined twice, keeping the first");
			return;
		}

		for alias in aliases {
			let alias_key = normalize_name(&alias);
			if alias_key == key {
				continue;
			}
			match self.aliases.get(&alias_key) {
				Some(existing) if existing != &key => {
					warn!("theme alias `{alias}` already points at `{existing}`");
				}
				_ => {
					self.aliases.insert(alias_key, key.clone());
				}
			}
		}
		self.themes.insert(key, Entry {
			display_name: name,
			theme,
		});
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let key = normalize_name(name);
		let key = self.aliases.get(&key).unwrap_or(&key);
		self.themes.get(key).map(|entry| entry.theme)
	}

	fn names(&self) -> Vec<String> {
		self.themes
			.values()
			.map(|entry| entry.display_name.clone())
			.collect()
	}
}

fn registry() -> &'static Registry {
	static REGISTRY: OnceLock<Registry> = OnceLock::new();
	REGISTRY.get_or_init(|| Registry::from_registrations(builtins::registrations()))
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Case-insensitive lookup by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	registry().names()
}
