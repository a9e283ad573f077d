//! Starter templates shipped with facade.

use std::sync::Arc;

use facade_model::{
    Body, Category, Footer, FooterKind, Header, HeaderKind, Palette, Section, SectionKind,
    TemplateDocument,
};

const PEXELS: &str = "https://images.pexels.com/photos";

fn image(photo: u32, width: u32) -> String {
    format!("{PEXELS}/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}")
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn palette(primary: &str, secondary: &str, accent: &str, text: &str, background: &str) -> Palette {
    Palette {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        text: text.to_string(),
        background: background.to_string(),
    }
}

struct Entry {
    id: &'static str,
    name: &'static str,
    category: Category,
    photo: u32,
    header: Header,
    sections: Vec<Section>,
    footer: Footer,
    colors: Palette,
}

impl Entry {
    fn into_document(self) -> TemplateDocument {
        TemplateDocument {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            thumbnail: image(self.photo, 800),
            preview: image(self.photo, 1200),
            header: Arc::new(self.header),
            body: Arc::new(Body::new(self.sections)),
            footer: Arc::new(self.footer),
            colors: Arc::new(self.colors),
        }
    }
}

/// Build the starter templates in catalog order.
pub(crate) fn templates() -> Vec<TemplateDocument> {
    vec![
        Entry {
            id: "ecom-1",
            name: "Modern Store",
            category: Category::Ecommerce,
            photo: 4968391,
            header: Header {
                kind: HeaderKind::Navbar,
                title: "ModernStore".to_string(),
                navigation: labels(&["Home", "Products", "Categories", "About", "Contact"]),
                has_search: true,
                style: "bg-white shadow-sm border-b".to_string(),
            },
            sections: vec![
                Section::new(
                    "hero-1",
                    SectionKind::Hero,
                    "Discover Amazing Products",
                    "Shop the latest trends with unbeatable prices and quality.",
                    "bg-gradient-to-r from-blue-600 to-purple-600 text-white",
                ),
                Section::new(
                    "products-1",
                    SectionKind::Products,
                    "Featured Products",
                    "Explore our handpicked selection of premium products.",
                    "bg-gray-50",
                ),
            ],
            footer: Footer {
                kind: FooterKind::Detailed,
                content: "© 2025 ModernStore. All rights reserved.".to_string(),
                links: labels(&["Privacy Policy", "Terms of Service", "Support"]),
                style: "bg-gray-900 text-white".to_string(),
            },
            colors: palette("#3B82F6", "#8B5CF6", "#10B981", "#1F2937", "#FFFFFF"),
        },
        Entry {
            id: "ecom-2",
            name: "Fashion Hub",
            category: Category::Ecommerce,
            photo: 1126993,
            header: Header {
                kind: HeaderKind::Hero,
                title: "Fashion Hub".to_string(),
                navigation: labels(&["Collections", "New Arrivals", "Sale", "Blog"]),
                has_search: true,
                style: "bg-black text-white".to_string(),
            },
            sections: vec![
                Section::new(
                    "hero-2",
                    SectionKind::Hero,
                    "Style Redefined",
                    "Discover the latest fashion trends and express your unique style.",
                    "bg-gradient-to-br from-pink-500 to-purple-700 text-white",
                ),
                Section::new(
                    "gallery-1",
                    SectionKind::Gallery,
                    "New Collections",
                    "Explore our seasonal collections and trending pieces.",
                    "bg-white",
                ),
            ],
            footer: Footer {
                kind: FooterKind::Social,
                content: "© 2025 Fashion Hub. Style never goes out of fashion.".to_string(),
                links: labels(&["Instagram", "Twitter", "Facebook", "Pinterest"]),
                style: "bg-black text-white".to_string(),
            },
            colors: palette("#EC4899", "#8B5CF6", "#F59E0B", "#111827", "#FFFFFF"),
        },
        Entry {
            id: "biz-1",
            name: "Corporate Pro",
            category: Category::Business,
            photo: 3184291,
            header: Header {
                kind: HeaderKind::Navbar,
                title: "CorporatePro".to_string(),
                navigation: labels(&["Home", "Services", "About", "Portfolio", "Contact"]),
                has_search: false,
                style: "bg-white shadow-md".to_string(),
            },
            sections: vec![
                Section::new(
                    "hero-3",
                    SectionKind::Hero,
                    "Professional Solutions",
                    "Empowering businesses with innovative strategies and cutting-edge technology.",
                    "bg-gradient-to-r from-gray-800 to-blue-800 text-white",
                ),
                Section::new(
                    "features-1",
                    SectionKind::Features,
                    "Our Services",
                    "Comprehensive business solutions tailored to your needs.",
                    "bg-white",
                ),
            ],
            footer: Footer {
                kind: FooterKind::Detailed,
                content: "© 2025 CorporatePro. Excellence in every solution.".to_string(),
                links: labels(&["Services", "Case Studies", "Careers", "Contact"]),
                style: "bg-gray-900 text-white".to_string(),
            },
            colors: palette("#1E40AF", "#6B7280", "#10B981", "#374151", "#F9FAFB"),
        },
        Entry {
            id: "port-1",
            name: "Creative Portfolio",
            category: Category::Portfolio,
            photo: 196644,
            header: Header {
                kind: HeaderKind::Minimal,
                title: "Alex Designer".to_string(),
                navigation: labels(&["Work", "About", "Contact"]),
                has_search: false,
                style: "bg-transparent text-white absolute top-0 left-0 right-0 z-10".to_string(),
            },
            sections: vec![
                Section::new(
                    "hero-4",
                    SectionKind::Hero,
                    "Creative Vision",
                    "Bringing ideas to life through innovative design and artistic expression.",
                    "bg-gradient-to-br from-purple-900 to-blue-900 text-white min-h-screen flex items-center",
                ),
                Section::new(
                    "gallery-2",
                    SectionKind::Gallery,
                    "Featured Work",
                    "A showcase of recent projects and creative endeavors.",
                    "bg-gray-50",
                ),
            ],
            footer: Footer {
                kind: FooterKind::Minimal,
                content: "© 2025 Alex Designer. Creating beautiful experiences.".to_string(),
                links: labels(&["Behance", "Dribbble", "Instagram"]),
                style: "bg-white border-t".to_string(),
            },
            colors: palette("#7C3AED", "#1E40AF", "#F59E0B", "#1F2937", "#FFFFFF"),
        },
        Entry {
            id: "blog-1",
            name: "Modern Blog",
            category: Category::Blog,
            photo: 261662,
            header: Header {
                kind: HeaderKind::Navbar,
                title: "Modern Blog".to_string(),
                navigation: labels(&["Home", "Articles", "Categories", "About", "Contact"]),
                has_search: true,
                style: "bg-white border-b-2 border-blue-500".to_string(),
            },
            sections: vec![
                Section::new(
                    "hero-5",
                    SectionKind::Hero,
                    "Stories Worth Reading",
                    "Discover insights, tutorials, and inspiration for modern living.",
                    "bg-gradient-to-r from-green-400 to-blue-500 text-white",
                ),
                Section::new(
                    "about-1",
                    SectionKind::About,
                    "Latest Articles",
                    "Stay updated with our latest posts and featured content.",
                    "bg-white",
                ),
            ],
            footer: Footer {
                kind: FooterKind::Social,
                content: "© 2025 Modern Blog. Sharing knowledge, inspiring minds.".to_string(),
                links: labels(&["RSS", "Twitter", "LinkedIn", "Medium"]),
                style: "bg-gray-800 text-white".to_string(),
            },
            colors: palette("#059669", "#3B82F6", "#F59E0B", "#374151", "#FFFFFF"),
        },
    ]
    .into_iter()
    .map(Entry::into_document)
    .collect()
}
