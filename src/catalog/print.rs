use catalog::config::CatalogConfig;
use catalog::model::Product;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const NAME_MAX_WIDTH: usize = 32;
const PUBLISHED_MARKER: &str = "●";

pub fn print_success(message: impl AsRef<str>) {
    println!("{}", message.as_ref().green());
}

pub fn print_info(message: impl AsRef<str>) {
    println!("{}", message.as_ref().dimmed());
}

pub fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    let id_width = products
        .iter()
        .map(|p| p.id.to_string().len())
        .max()
        .unwrap_or(1);
    let code_width = products
        .iter()
        .map(|p| p.code_value.width())
        .max()
        .unwrap_or(0);
    let name_width = products
        .iter()
        .map(|p| p.name.width().min(NAME_MAX_WIDTH))
        .max()
        .unwrap_or(0);

    for p in products {
        let marker = if p.is_published { PUBLISHED_MARKER } else { " " };
        let name = truncate_to_width(&p.name, NAME_MAX_WIDTH);
        println!(
            "{} {:>iw$}. {}{}  {}{}  {:>6} x {:>10.2}  {}",
            marker.green(),
            p.id,
            p.code_value.yellow(),
            pad(&p.code_value, code_width),
            name.bold(),
            pad(&name, name_width),
            p.quantity,
            p.price,
            p.expiration.dimmed(),
            iw = id_width,
        );
    }
}

pub fn print_product(product: &Product) {
    println!(
        "{} {}",
        format!("#{}", product.id).yellow(),
        product.name.bold()
    );
    println!("--------------------------------");
    println!("code:       {}", product.code_value);
    println!("quantity:   {}", product.quantity);
    println!("price:      {:.2}", product.price);
    println!("expiration: {}", product.expiration);
    println!(
        "published:  {}",
        if product.is_published { "yes" } else { "no" }
    );
}

pub fn print_config(config: &CatalogConfig) {
    for key in CatalogConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Spaces needed to bring `s` up to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(s.width()))
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
