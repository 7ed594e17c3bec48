use colored::Colorize;
use realty::api::{CmdMessage, MessageLevel};
use realty::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 14;
const NAME_WIDTH: usize = 36;
const CATEGORY_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_products(products: &[Product]) {
    for p in products {
        println!(
            "{} {} {} {}",
            pad(&p.id, ID_WIDTH).yellow(),
            pad(&p.name, NAME_WIDTH),
            pad(&p.category, CATEGORY_WIDTH).cyan(),
            format_price(p.price).bold()
        );
    }
}

pub(super) fn print_product_detail(product: &Product) {
    println!("{} {}", product.id.yellow(), product.name.bold());
    println!("--------------------------------");
    println!("{}", product.category.cyan());
    println!("{}", format_price(product.price).blue().bold());
    if !product.image_url.is_empty() {
        println!("{}", product.image_url.dimmed());
    }
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
}

pub(super) fn print_lines<S: AsRef<str>>(lines: &[S]) {
    for line in lines {
        println!("{}", line.as_ref());
    }
}

/// `$1,234,567` with up to two decimals, trailing zeros dropped.
pub(super) fn format_price(price: f64) -> String {
    let rounded = format!("{:.2}", price.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if price < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, frac)
    }
}

/// Truncates to `width` columns with an ellipsis, then right-pads.
fn pad(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) && s.width() > width {
            out.push('…');
            used += 1;
            break;
        }
        out.push(c);
        used += w;
    }
    format!("{}{}", out, " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(500000.0), "$500,000");
        assert_eq!(format_price(999.0), "$999");
        assert_eq!(format_price(1234.5), "$1,234.5");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn pad_truncates_wide_text() {
        let out = pad("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert_eq!(pad("ab", 5), "ab   ");
    }
}
