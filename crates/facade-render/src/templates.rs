//! HTML rendering of page structures and catalog galleries.

use facade_catalog::TemplateCard;
use minijinja::{context, Environment};

use crate::page::PageStructure;

/// Context for rendering one website page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Document title
    pub title: String,
    /// Structure to render
    pub page: PageStructure,
    /// Stylesheet URLs
    pub styles: Vec<String>,
    /// Script URLs appended to the body
    pub scripts: Vec<String>,
    /// Load the Tailwind runtime so style hints take effect
    pub tailwind: bool,
}

/// One gallery card with its link target.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GalleryCard {
    #[serde(flatten)]
    pub card: TemplateCard,
    pub href: String,
}

/// A category filter label with its template count.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FilterCount {
    pub label: String,
    pub count: usize,
}

/// Context for rendering a template gallery.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GalleryContext {
    pub title: String,
    pub filters: Vec<FilterCount>,
    pub cards: Vec<GalleryCard>,
    pub styles: Vec<String>,
    pub scripts: Vec<String>,
    pub tailwind: bool,
}

/// HTML renderer using minijinja.
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Create a renderer with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("base.html", BASE_TEMPLATE)
            .expect("Failed to add base template");
        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");
        env.add_template("gallery.html", GALLERY_TEMPLATE)
            .expect("Failed to add gallery template");

        Self { env }
    }

    /// Render a website page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &context.title,
            page => &context.page,
            styles => &context.styles,
            scripts => &context.scripts,
            tailwind => context.tailwind,
        })
    }

    /// Render a gallery of template cards.
    pub fn render_gallery(&self, context: &GalleryContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("gallery.html")?;

        tmpl.render(context! {
            title => &context.title,
            filters => &context.filters,
            cards => &context.cards,
            styles => &context.styles,
            scripts => &context.scripts,
            tailwind => context.tailwind,
        })
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% if tailwind %}<script src="https://cdn.tailwindcss.com"></script>
  {% endif %}{% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body>
{% block body %}{% endblock %}
{% for script in scripts %}<script src="{{ script }}"></script>
{% endfor %}
</body>
</html>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block body %}
{% set compact = page.density == "compact" %}
<div class="facade-stage">
<div class="facade-frame facade-{{ page.mode }}" style="width: {{ page.viewport.width }}; height: {{ page.viewport.height }}">
  <header class="{{ page.header.style }} {% if compact %}px-4 py-3{% else %}px-6 py-4{% endif %} sticky top-0 z-50" data-select="{{ page.header.target }}">
    <div class="max-w-7xl mx-auto flex items-center justify-between">
      <h1 class="font-bold {% if compact %}text-lg{% else %}text-xl{% endif %}">{{ page.header.title }}</h1>
      {% if page.header.navigation.mode == "inline" %}
      <nav class="flex space-x-8">
        {% for item in page.header.navigation.items %}<a href="#" class="text-sm font-medium hover:opacity-80">{{ item }}</a>
        {% endfor %}
      </nav>
      {% endif %}
      <div class="flex items-center space-x-4">
        {% if page.header.search %}<input type="text" placeholder="Search..." class="px-4 py-2 border rounded-md text-sm">{% endif %}
        {% if page.header.cart %}<span class="facade-icon" aria-label="Cart">&#128722;</span>{% endif %}
        {% if page.header.navigation.mode == "collapsed" %}
        <details class="facade-menu">
          <summary aria-label="Menu">&#9776;</summary>
          <ul>{% for item in page.header.navigation.items %}<li><a href="#">{{ item }}</a></li>{% endfor %}</ul>
        </details>
        {% else %}<span class="facade-icon" aria-label="Account">&#128100;</span>{% endif %}
      </div>
    </div>
  </header>

  <main>
  {% for section in page.sections %}
  {% set layout = section.layout %}
  <section id="{{ section.id }}" class="{{ section.style }} {% if compact %}px-4 py-8{% else %}px-6 py-16{% endif %} relative{% if section.is_selected %} facade-selected ring-2 ring-blue-500 ring-inset{% endif %}" data-select="{{ section.id }}">
    {% if section.is_selected %}<div class="facade-badge absolute top-2 right-2 bg-blue-500 text-white px-2 py-1 rounded text-xs">Editing</div>{% endif %}
    <div class="max-w-7xl mx-auto">
    {% if layout.kind == "hero" %}
      <div class="text-center">
        <h2 class="font-bold mb-6 {% if compact %}text-3xl{% else %}text-5xl{% endif %}">{{ section.title }}</h2>
        <p class="mb-8 opacity-90 max-w-2xl mx-auto {% if compact %}text-base{% else %}text-xl{% endif %}">{{ section.content }}</p>
        <button class="px-8 py-3 rounded-lg font-semibold" style="background-color: {{ layout.call_to_action.color }}">{{ layout.call_to_action.label }}</button>
      </div>
    {% elif layout.kind == "about" %}
      <div class="grid gap-12 items-center" style="grid-template-columns: repeat({{ layout.columns }}, minmax(0, 1fr))">
        <div>
          <h2 class="font-bold text-gray-900 mb-6 {% if compact %}text-2xl{% else %}text-3xl{% endif %}">{{ section.title }}</h2>
          <p class="text-gray-600 mb-6 leading-relaxed">{{ section.content }}</p>
          <ul class="space-y-4">
          {% for highlight in layout.highlights %}
            <li class="flex items-center"><span class="facade-dot" style="background-color: {{ highlight.marker_color }}"></span><span class="text-gray-700">{{ highlight.label }}</span></li>
          {% endfor %}
          </ul>
          <button class="mt-6 px-6 py-3 text-white rounded-lg" style="background-color: {{ layout.button.color }}">{{ layout.button.label }} &rarr;</button>
        </div>
        <div class="facade-placeholder aspect-square bg-gray-200 rounded-lg"></div>
      </div>
    {% else %}
      <div class="text-center mb-16">
        <h2 class="font-bold text-gray-900 mb-4 {% if compact %}text-2xl{% else %}text-3xl{% endif %}">{{ section.title }}</h2>
        <p class="text-gray-600 max-w-2xl mx-auto">{{ section.content }}</p>
      </div>
      {% if layout.kind == "features" %}
      <div class="grid gap-8" style="grid-template-columns: repeat({{ layout.columns }}, minmax(0, 1fr))">
        {% for card in layout.cards %}
        <div class="text-center">
          <div class="facade-feature-icon" style="background-color: {{ card.icon_color }}">&#9733;</div>
          <h3 class="text-xl font-semibold mb-2">{{ card.title }}</h3>
          <p class="text-gray-600">{{ card.description }}</p>
        </div>
        {% endfor %}
      </div>
      {% elif layout.kind == "products" %}
      <div class="grid gap-6" style="grid-template-columns: repeat({{ layout.columns }}, minmax(0, 1fr))">
        {% for card in layout.cards %}
        <div class="bg-white rounded-lg shadow-md overflow-hidden">
          <div class="facade-placeholder aspect-square bg-gray-200"></div>
          <div class="p-4">
            <h3 class="font-semibold mb-2">{{ card.title }}</h3>
            <p class="text-gray-600 text-sm mb-4">{{ card.description }}</p>
            <div class="flex items-center justify-between">
              <span class="text-xl font-bold" style="color: {{ card.price_color }}">{{ card.price }}</span>
              <button class="px-4 py-2 text-white rounded-lg" style="background-color: {{ card.button.color }}">{{ card.button.label }}</button>
            </div>
          </div>
        </div>
        {% endfor %}
      </div>
      {% elif layout.kind == "gallery" %}
      <div class="grid gap-4" style="grid-template-columns: repeat({{ layout.columns }}, minmax(0, 1fr))">
        {% for slot in layout.slots %}
        <div class="aspect-square bg-gray-200 rounded-lg overflow-hidden"><img src="{{ slot.src }}" alt="{{ slot.alt }}" class="w-full h-full object-cover"></div>
        {% endfor %}
      </div>
      {% elif layout.kind == "contact" %}
      <div class="grid gap-12" style="grid-template-columns: repeat({{ layout.columns }}, minmax(0, 1fr))">
        <div class="space-y-6">
          {% for detail in layout.details %}
          <div class="flex items-center">
            <div class="facade-contact-icon" style="background-color: {{ detail.tint }}; color: {{ detail.icon_color }}">{% if detail.icon == "mail" %}&#9993;{% elif detail.icon == "phone" %}&#9742;{% else %}&#128205;{% endif %}</div>
            <div>
              <h3 class="font-semibold">{{ detail.label }}</h3>
              <p class="text-gray-600">{{ detail.value }}</p>
            </div>
          </div>
          {% endfor %}
        </div>
        <form class="space-y-4" onsubmit="return false">
          {% for field in layout.form.fields %}
          {% if field.kind.type == "textarea" %}
          <textarea name="{{ field.name }}" placeholder="{{ field.placeholder }}" rows="{{ field.kind.rows }}" required class="w-full p-3 border border-gray-200 rounded-lg"></textarea>
          {% else %}
          <input type="{{ field.kind.type }}" name="{{ field.name }}" placeholder="{{ field.placeholder }}" required class="w-full p-3 border border-gray-200 rounded-lg">
          {% endif %}
          {% endfor %}
          <button type="submit" class="w-full py-3 text-white rounded-lg" style="background-color: {{ layout.form.submit.color }}">{{ layout.form.submit.label }}</button>
        </form>
      </div>
      {% endif %}
    {% endif %}
    </div>
  </section>
  {% endfor %}
  </main>

  <footer class="{{ page.footer.style }} {% if compact %}px-4 py-6{% else %}px-6 py-8{% endif %}" data-select="{{ page.footer.target }}">
    <div class="max-w-7xl mx-auto {% if page.footer.centered %}text-center{% else %}flex justify-between items-center{% endif %}">
      <p class="{% if page.footer.centered %}mb-4{% else %}mb-0{% endif %}">{{ page.footer.content }}</p>
      <div class="flex {% if page.footer.centered %}justify-center{% else %}justify-end{% endif %} space-x-6">
        {% for link in page.footer.links %}<a href="#" class="hover:opacity-80 text-sm">{{ link }}</a>
        {% endfor %}
      </div>
    </div>
  </footer>
</div>
</div>
{% endblock %}"##;

const GALLERY_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block body %}
<div class="max-w-7xl mx-auto px-6 py-8">
  <h1 class="text-4xl font-bold text-gray-900 mb-8 text-center">{{ title }}</h1>
  <ul class="facade-filters flex flex-wrap gap-2 mb-8">
  {% for filter in filters %}
    <li class="px-4 py-2 rounded-full text-sm bg-white border border-gray-200">{{ filter.label }} ({{ filter.count }})</li>
  {% endfor %}
  </ul>
  <div class="grid gap-8" style="grid-template-columns: repeat(auto-fill, minmax(280px, 1fr))">
  {% for card in cards %}
    <a class="facade-card block bg-white rounded-xl shadow-sm overflow-hidden" href="{{ card.href }}">
      <img src="{{ card.thumbnail }}" alt="{{ card.name }}" class="w-full aspect-video object-cover">
      <div class="p-6">
        <div class="flex items-center justify-between mb-3">
          <h3 class="text-xl font-semibold text-gray-900">{{ card.name }}</h3>
          <span class="px-3 py-1 rounded-full text-xs font-medium uppercase">{{ card.category }}</span>
        </div>
        <p class="text-gray-600 mb-4">{{ card.description }}</p>
        <div class="flex space-x-1">
          {% for swatch in card.swatches %}<span class="facade-swatch" style="background-color: {{ swatch }}"></span>{% endfor %}
        </div>
      </div>
    </a>
  {% endfor %}
  </div>
  {% if not cards %}
  <div class="text-center py-16">
    <h3 class="text-xl font-semibold text-gray-900 mb-2">No templates found</h3>
    <p class="text-gray-600">Try adjusting your search or filter criteria</p>
  </div>
  {% endif %}
</div>
{% endblock %}"##;
