use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::modules::catalog::{Catalog, Category};

pub struct CatalogTestHelpers;

impl CatalogTestHelpers {
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Face art that appears in no other table.
    pub fn face_only_arts() -> Vec<&'static str> {
        let catalog = Catalog::global();
        catalog
            .arts(Category::Face)
            .iter()
            .copied()
            .filter(|face| {
                Category::ALL
                    .iter()
                    .filter(|category| **category != Category::Face)
                    .all(|category| !catalog.arts(*category).contains(face))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogTestHelpers;
    use crate::modules::catalog::{Catalog, Category};

    #[test]
    fn test_every_face_is_exclusive() {
        let faces = CatalogTestHelpers::face_only_arts();
        assert_eq!(faces.len(), Catalog::global().arts(Category::Face).len());
    }
}
