//! Synthetic PDF fixtures built with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Bold font resource key.
pub const BOLD: &str = "F1";
/// Regular font resource key.
pub const REGULAR: &str = "F2";

/// One line of text: font key, size, text.
pub type Line<'a> = (&'a str, i64, &'a str);

/// Build a PDF with one page per entry of `pages`.
///
/// `F1` is Helvetica-Bold and `F2` is Helvetica.
pub fn build_pdf(pages: &[Vec<Line<'_>>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            BOLD => bold_id,
            REGULAR => regular_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        let mut y: i64 = 760;
        for (font, size, text) in lines {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec![(*font).into(), (*size).into()]));
            operations.push(Operation::new("Td", vec![72i64.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            operations.push(Operation::new("ET", vec![]));
            y -= 30;
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();
    data
}

/// A two-page report with a title, two sections and a subsection.
pub fn report_pdf() -> Vec<u8> {
    build_pdf(&[
        vec![
            (BOLD, 24, "Annual Report"),
            (REGULAR, 11, "This report summarizes the year."),
            (BOLD, 18, "Revenue"),
            (REGULAR, 11, "Revenue grew in every region."),
        ],
        vec![
            (BOLD, 14, "Regional Breakdown"),
            (REGULAR, 11, "Details per region follow."),
            (BOLD, 18, "Outlook"),
            (REGULAR, 11, "We expect further growth."),
        ],
    ])
}
