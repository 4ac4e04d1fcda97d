use serde::Serialize;

/// Accumulated weight per trait, kept in the order each trait first contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraitTally {
    entries: Vec<TraitWeight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitWeight {
    pub trait_tag: String,
    pub weight: u32,
}

impl TraitTally {
    pub fn add(&mut self, trait_tag: &str, weight: u32) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.trait_tag == trait_tag)
        {
            Some(entry) => entry.weight += weight,
            None => self.entries.push(TraitWeight {
                trait_tag: trait_tag.to_string(),
                weight,
            }),
        }
    }

    pub fn get(&self, trait_tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.trait_tag == trait_tag)
            .map(|entry| entry.weight)
    }

    /// Heaviest trait; on equal weight the one seen first is kept.
    pub fn dominant(&self) -> Option<&str> {
        self.entries
            .iter()
            .fold(None::<&TraitWeight>, |best, entry| match best {
                Some(current) if current.weight >= entry.weight => Some(current),
                _ => Some(entry),
            })
            .map(|entry| entry.trait_tag.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitWeight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
