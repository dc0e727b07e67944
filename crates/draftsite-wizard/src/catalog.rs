//! Option catalogs for the step forms and their display labels.
//!
//! Unknown ids are shown as-is rather than erroring; the wizard never
//! rejects a value it does not recognize.

/// An id/label pair offered by a step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub const BUSINESS_TYPES: &[CatalogEntry] = &[
    CatalogEntry { id: "business", label: "Business" },
    CatalogEntry { id: "personal", label: "Personal" },
    CatalogEntry { id: "portfolio", label: "Portfolio" },
    CatalogEntry { id: "ecommerce", label: "E-commerce" },
    CatalogEntry { id: "blog", label: "Blog" },
];

pub const INDUSTRIES: &[CatalogEntry] = &[
    CatalogEntry { id: "technology", label: "Technology" },
    CatalogEntry { id: "healthcare", label: "Healthcare" },
    CatalogEntry { id: "education", label: "Education" },
    CatalogEntry { id: "finance", label: "Finance" },
    CatalogEntry { id: "retail", label: "Retail" },
    CatalogEntry { id: "food", label: "Food & Beverage" },
    CatalogEntry { id: "arts", label: "Arts & Entertainment" },
    CatalogEntry { id: "professional", label: "Professional Services" },
    CatalogEntry { id: "nonprofit", label: "Non-profit" },
    CatalogEntry { id: "other", label: "Other" },
];

pub const DESIGN_STYLES: &[CatalogEntry] = &[
    CatalogEntry { id: "minimal", label: "Minimal & Clean" },
    CatalogEntry { id: "modern", label: "Modern & Bold" },
    CatalogEntry { id: "classic", label: "Classic & Professional" },
    CatalogEntry { id: "creative", label: "Creative & Artistic" },
    CatalogEntry { id: "corporate", label: "Corporate & Formal" },
];

pub const COLOR_SCHEMES: &[CatalogEntry] = &[
    CatalogEntry { id: "blue", label: "Blue & Professional" },
    CatalogEntry { id: "green", label: "Green & Fresh" },
    CatalogEntry { id: "purple", label: "Purple & Creative" },
    CatalogEntry { id: "red", label: "Red & Bold" },
    CatalogEntry { id: "neutral", label: "Neutral & Elegant" },
];

pub const FEATURES: &[CatalogEntry] = &[
    CatalogEntry { id: "contact", label: "Contact Form" },
    CatalogEntry { id: "gallery", label: "Image Gallery" },
    CatalogEntry { id: "blog", label: "Blog Section" },
    CatalogEntry { id: "testimonials", label: "Testimonials" },
    CatalogEntry { id: "newsletter", label: "Newsletter Signup" },
    CatalogEntry { id: "social", label: "Social Media Integration" },
    CatalogEntry { id: "map", label: "Google Maps" },
    CatalogEntry { id: "booking", label: "Booking/Appointment System" },
    CatalogEntry { id: "chat", label: "Live Chat" },
    CatalogEntry { id: "search", label: "Search Functionality" },
];

pub const CONTENT_TYPES: &[CatalogEntry] = &[
    CatalogEntry { id: "text", label: "Text Content" },
    CatalogEntry { id: "images", label: "Images" },
    CatalogEntry { id: "videos", label: "Videos" },
    CatalogEntry { id: "documents", label: "Documents/PDFs" },
    CatalogEntry { id: "products", label: "Product Listings" },
];

/// Look up a label in a catalog, falling back to the raw id.
pub fn label_for<'a>(catalog: &[CatalogEntry], id: &'a str) -> &'a str {
    catalog
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.label)
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve_to_labels() {
        assert_eq!(label_for(BUSINESS_TYPES, "ecommerce"), "E-commerce");
        assert_eq!(label_for(COLOR_SCHEMES, "purple"), "Purple & Creative");
        assert_eq!(label_for(FEATURES, "booking"), "Booking/Appointment System");
    }

    #[test]
    fn unknown_id_falls_back_to_itself() {
        assert_eq!(label_for(DESIGN_STYLES, "brutalist"), "brutalist");
        assert_eq!(label_for(CONTENT_TYPES, ""), "");
    }

    #[test]
    fn catalogs_have_no_duplicate_ids() {
        for catalog in [
            BUSINESS_TYPES,
            INDUSTRIES,
            DESIGN_STYLES,
            COLOR_SCHEMES,
            FEATURES,
            CONTENT_TYPES,
        ] {
            for (i, entry) in catalog.iter().enumerate() {
                assert!(
                    !catalog[i + 1..].iter().any(|e| e.id == entry.id),
                    "duplicate id {}",
                    entry.id
                );
            }
        }
    }
}
