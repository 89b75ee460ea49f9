//! PDF fixtures built in memory with lopdf.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{Dictionary, Object, Stream, dictionary};

/// Content stream drawing a 2x2 ruled grid with no text in it.
pub const EMPTY_GRID: &[u8] = b"
    1 w
    100 700 m 300 700 l S
    100 680 m 300 680 l S
    100 660 m 300 660 l S
    100 700 m 100 660 l S
    200 700 m 200 660 l S
    300 700 m 300 660 l S
";

/// Content stream drawing a bordered 2x3 table with text in every cell.
pub const BORDERED_TABLE: &[u8] = b"
    q 1 w
    72 720 m 372 720 l S
    72 680 m 372 680 l S
    72 640 m 372 640 l S
    72 640 m 72 720 l S
    172 640 m 172 720 l S
    272 640 m 272 720 l S
    372 640 m 372 720 l S
    Q
    BT /F1 10 Tf
    82 700 Td (Part) Tj
    100 0 Td (Qty) Tj
    100 0 Td (Unit) Tj
    -200 -40 Td (Bolt) Tj
    100 0 Td (12) Tj
    100 0 Td (pcs) Tj
    ET
";

/// Content stream showing one line of Helvetica text.
pub fn text_content(text: &str) -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes()
}

/// Build a PDF with one page per content stream and an optional /Info
/// dictionary.
pub fn pdf_with_contents(contents: &[Vec<u8>], info: &[(&str, &str)]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let stream = Stream::new(dictionary! {}, content.clone());
        let content_id = doc.add_object(stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(contents.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    if !info.is_empty() {
        let mut info_dict = Dictionary::new();
        for (key, value) in info {
            info_dict.set(*key, Object::string_literal(*value));
        }
        let info_id = doc.add_object(Object::Dictionary(info_dict));
        doc.trailer.set("Info", Object::Reference(info_id));
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Build a PDF with one line of text per page.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let contents: Vec<Vec<u8>> = texts.iter().map(|t| text_content(t)).collect();
    pdf_with_contents(&contents, &[])
}

/// Write PDF bytes to a temporary file.
pub fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}
