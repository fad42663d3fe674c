use serde::Serialize;
use std::fmt;

/// The Schema.org types offered in the selection menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Product,
    Article,
    LocalBusiness,
    Organization,
    Person,
    Recipe,
    Event,
    FaqPage,
    HowTo,
    JobPosting,
    Review,
    BreadcrumbList,
    VideoObject,
    ImageObject,
    WebSite,
}

impl SchemaKind {
    /// Menu order
    pub const ALL: [SchemaKind; 15] = [
        SchemaKind::Product,
        SchemaKind::Article,
        SchemaKind::LocalBusiness,
        SchemaKind::Organization,
        SchemaKind::Person,
        SchemaKind::Recipe,
        SchemaKind::Event,
        SchemaKind::FaqPage,
        SchemaKind::HowTo,
        SchemaKind::JobPosting,
        SchemaKind::Review,
        SchemaKind::BreadcrumbList,
        SchemaKind::VideoObject,
        SchemaKind::ImageObject,
        SchemaKind::WebSite,
    ];

    /// Schema.org type name
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::Product => "Product",
            SchemaKind::Article => "Article",
            SchemaKind::LocalBusiness => "LocalBusiness",
            SchemaKind::Organization => "Organization",
            SchemaKind::Person => "Person",
            SchemaKind::Recipe => "Recipe",
            SchemaKind::Event => "Event",
            SchemaKind::FaqPage => "FAQPage",
            SchemaKind::HowTo => "HowTo",
            SchemaKind::JobPosting => "JobPosting",
            SchemaKind::Review => "Review",
            SchemaKind::BreadcrumbList => "BreadcrumbList",
            SchemaKind::VideoObject => "VideoObject",
            SchemaKind::ImageObject => "ImageObject",
            SchemaKind::WebSite => "WebSite",
        }
    }

    /// Human-facing menu label
    pub fn label(&self) -> &'static str {
        match self {
            SchemaKind::Product => "Product",
            SchemaKind::Article => "Article",
            SchemaKind::LocalBusiness => "Local business",
            SchemaKind::Organization => "Organization",
            SchemaKind::Person => "Person",
            SchemaKind::Recipe => "Recipe",
            SchemaKind::Event => "Event",
            SchemaKind::FaqPage => "FAQ",
            SchemaKind::HowTo => "How-to",
            SchemaKind::JobPosting => "Job posting",
            SchemaKind::Review => "Review",
            SchemaKind::BreadcrumbList => "Breadcrumb",
            SchemaKind::VideoObject => "Video",
            SchemaKind::ImageObject => "Image",
            SchemaKind::WebSite => "Website",
        }
    }

    /// Case-insensitive lookup by type name; `FAQ` is accepted for `FAQPage`.
    /// Unknown names are custom types and return `None`.
    pub fn parse(name: &str) -> Option<SchemaKind> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("FAQ") {
            return Some(SchemaKind::FaqPage);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Field guidance for types that have it
    pub fn fields(&self) -> Option<SchemaFields> {
        let fields = match self {
            SchemaKind::Product => SchemaFields::new(
                &["name"],
                &["description", "image", "brand", "offers", "aggregateRating", "review"],
            ),
            SchemaKind::Article => SchemaFields::new(
                &["headline", "datePublished"],
                &["author", "image", "dateModified", "publisher"],
            ),
            SchemaKind::LocalBusiness => SchemaFields::new(
                &["name", "address"],
                &["telephone", "openingHours", "geo", "priceRange", "aggregateRating"],
            ),
            SchemaKind::Organization => SchemaFields::new(
                &["name"],
                &["url", "logo", "contactPoint", "sameAs", "address"],
            ),
            SchemaKind::Recipe => SchemaFields::new(
                &["name", "recipeIngredient", "recipeInstructions"],
                &[
                    "image",
                    "author",
                    "datePublished",
                    "description",
                    "prepTime",
                    "cookTime",
                    "nutrition",
                ],
            ),
            SchemaKind::Event => SchemaFields::new(
                &["name", "startDate", "location"],
                &["description", "endDate", "organizer", "offers", "performer"],
            ),
            _ => return None,
        };
        Some(fields)
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Required and recommended properties of a type. Used to word prompts only;
/// generated markup is never checked against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaFields {
    pub required: &'static [&'static str],
    pub recommended: &'static [&'static str],
}

impl SchemaFields {
    const fn new(required: &'static [&'static str], recommended: &'static [&'static str]) -> Self {
        Self {
            required,
            recommended,
        }
    }
}

/// One row of the type menu
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<SchemaFields>,
}

/// Lookup over the supported markup types
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaCatalog;

impl SchemaCatalog {
    pub fn menu(&self) -> Vec<CatalogEntry> {
        SchemaKind::ALL
            .iter()
            .map(|kind| CatalogEntry {
                name: kind.name(),
                label: kind.label(),
                fields: kind.fields(),
            })
            .collect()
    }

    /// Field guidance for a type name, custom names included
    pub fn fields_for(&self, schema_type: &str) -> Option<SchemaFields> {
        SchemaKind::parse(schema_type).and_then(|kind| kind.fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(SchemaKind::parse("product"), Some(SchemaKind::Product));
        assert_eq!(SchemaKind::parse(" LocalBusiness "), Some(SchemaKind::LocalBusiness));
        assert_eq!(SchemaKind::parse("FAQ"), Some(SchemaKind::FaqPage));
        assert_eq!(SchemaKind::parse("faqpage"), Some(SchemaKind::FaqPage));
        assert_eq!(SchemaKind::parse("SoftwareApplication"), None);
    }

    #[test]
    fn test_menu_order_and_fields() {
        let menu = SchemaCatalog.menu();
        assert_eq!(menu.len(), 15);
        assert_eq!(menu[0].name, "Product");
        assert_eq!(menu[14].name, "WebSite");

        let with_fields: Vec<_> = menu
            .iter()
            .filter(|e| e.fields.is_some())
            .map(|e| e.name)
            .collect();
        assert_eq!(
            with_fields,
            vec!["Product", "Article", "LocalBusiness", "Organization", "Recipe", "Event"]
        );
    }

    #[test]
    fn test_fields_for() {
        let event = SchemaCatalog.fields_for("event").unwrap();
        assert_eq!(event.required, &["name", "startDate", "location"]);
        assert!(SchemaCatalog.fields_for("Person").is_none());
        assert!(SchemaCatalog.fields_for("Custom").is_none());
    }
}
