//! Printable document → standalone PDF bytes.
//!
//! Consumes the [`PrintableDocument`] description verbatim and lays it out
//! on A4 pages with a top-down y cursor; a new page is started whenever the
//! next block would cross the bottom margin. Helvetica text only, WinAnsi
//! encoded. This is the only fallible surface of the crate — calculation
//! and layout always succeed.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use thiserror::Error;

use crate::render::PrintableDocument;

/// Errors that can occur while serializing the PDF.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PdfError {
    /// Content stream encoding failed.
    #[error("content stream encoding failed: {0}")]
    Content(String),

    /// Document serialization failed.
    #[error("PDF serialization failed: {0}")]
    Write(String),
}

/// Download file name convention: `<invoiceNumber>.pdf`, falling back to
/// `invoice.pdf` when the number is blank.
pub fn file_name(invoice_number: &str) -> String {
    if invoice_number.is_empty() {
        "invoice.pdf".to_string()
    } else {
        format!("{invoice_number}.pdf")
    }
}

// A4 in points.
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 56.0;

// Table column x positions (Description / Qty / Rate / Amount).
const COL_QTY: f32 = 340.0;
const COL_RATE: f32 = 410.0;
const COL_AMOUNT: f32 = 490.0;
// Totals box label/value columns.
const TOTALS_LABEL_X: f32 = 340.0;
const TOTALS_VALUE_X: f32 = 470.0;

/// Render the printable document into PDF bytes.
pub fn generate(doc: &PrintableDocument) -> Result<Vec<u8>, PdfError> {
    let mut writer = PageWriter::new();

    // Header: title + meta box rows.
    writer.text(MARGIN, 18.0, true, &doc.title);
    writer.advance(6.0);
    writer.meta_row("Invoice No.", &doc.meta.invoice_number);
    writer.meta_row("Invoice Date", &doc.meta.invoice_date);
    writer.meta_row("Period", &doc.meta.period);
    writer.meta_row("UTR", &doc.meta.utr);
    writer.advance(10.0);

    // From / Bill To cards.
    writer.text(MARGIN, 9.5, false, &doc.from.title.to_uppercase());
    writer.text(PAGE_WIDTH / 2.0, 9.5, false, &doc.bill_to.title.to_uppercase());
    writer.advance(14.0);
    writer.text(MARGIN, 10.5, true, &doc.from.name);
    writer.text(PAGE_WIDTH / 2.0, 10.5, true, &doc.bill_to.name);
    writer.advance(24.0);

    // Line-items table.
    writer.text(MARGIN, 9.5, true, "Description");
    writer.text(COL_QTY, 9.5, true, "Qty");
    writer.text(COL_RATE, 9.5, true, "Rate");
    writer.text(COL_AMOUNT, 9.5, true, "Amount");
    writer.advance(6.0);
    writer.rule();
    writer.advance(14.0);
    writer.text(MARGIN, 9.5, false, &doc.line_items.description);
    writer.text(COL_QTY, 9.5, false, &doc.line_items.quantity);
    writer.text(COL_RATE, 9.5, false, &doc.line_items.rate);
    writer.text(COL_AMOUNT, 9.5, false, &doc.line_items.amount);
    writer.advance(13.0);
    writer.text(MARGIN, 8.5, false, &doc.line_items.work_dates);
    writer.advance(8.0);
    writer.rule();
    writer.advance(24.0);

    // Totals box.
    writer.text(TOTALS_LABEL_X, 9.5, false, &doc.totals.gross_label);
    writer.text(TOTALS_VALUE_X, 9.5, true, &doc.totals.gross_value);
    writer.advance(14.0);
    writer.text(TOTALS_LABEL_X, 9.5, false, &doc.totals.deduction_label);
    writer.text(TOTALS_VALUE_X, 9.5, true, &doc.totals.deduction_value);
    writer.advance(10.0);
    writer.rule_from(TOTALS_LABEL_X);
    writer.advance(14.0);
    writer.text(TOTALS_LABEL_X, 10.5, true, &doc.totals.net_label);
    writer.text(TOTALS_VALUE_X, 10.5, true, &doc.totals.net_value);
    writer.advance(16.0);
    writer.text(TOTALS_LABEL_X, 9.2, false, &doc.unit_note);
    writer.advance(28.0);

    // Footer.
    writer.text(MARGIN, 8.5, false, &doc.footer);

    writer.finish()
}

/// Top-down page layout with automatic page breaks.
struct PageWriter {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Place a text run at the current baseline.
    fn text(&mut self, x: f32, size: f32, bold: bool, s: &str) {
        let font = if bold { "F2" } else { "F1" };
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.ops
            .push(Operation::new("Td", vec![x.into(), self.y.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(s),
                lopdf::StringFormat::Literal,
            )],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Right-aligned meta row in the header corner.
    fn meta_row(&mut self, label: &str, value: &str) {
        self.text(COL_QTY, 9.5, false, label);
        self.text(COL_RATE + 20.0, 9.5, true, value);
        self.advance(13.0);
    }

    /// Thin horizontal divider across the content width.
    fn rule(&mut self) {
        self.rule_from(MARGIN);
    }

    fn rule_from(&mut self, x: f32) {
        self.ops.push(Operation::new("g", vec![0.8f32.into()]));
        self.ops.push(Operation::new(
            "re",
            vec![
                x.into(),
                self.y.into(),
                (PAGE_WIDTH - MARGIN - x).into(),
                0.7f32.into(),
            ],
        ));
        self.ops.push(Operation::new("f", vec![]));
        self.ops.push(Operation::new("g", vec![0f32.into()]));
    }

    /// Move the baseline down, breaking to a new page at the bottom margin.
    fn advance(&mut self, dy: f32) {
        self.y -= dy;
        if self.y < MARGIN {
            self.pages.push(std::mem::take(&mut self.ops));
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn finish(mut self) -> Result<Vec<u8>, PdfError> {
        if !self.ops.is_empty() {
            self.pages.push(self.ops);
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids = Vec::new();
        let page_count = self.pages.len();
        for operations in self.pages {
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| PdfError::Content(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count as i64,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    PAGE_WIDTH.into(),
                    PAGE_HEIGHT.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut output = Vec::new();
        doc.save_to(&mut output)
            .map_err(|e| PdfError::Write(e.to_string()))?;
        Ok(output)
    }
}

/// Encode text for Helvetica/WinAnsi: Latin-1 passes through, the few
/// typographic characters the layout uses get their WinAnsi code points,
/// anything else degrades to a question mark.
fn encode_win_ansi(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '…' => out.push(0x85),
            '–' => out.push(0x96),
            '•' => out.push(0x95),
            c if (c as u32) < 0x80 => out.push(c as u8),
            c if (0xA0..=0xFF).contains(&(c as u32)) => out.push(c as u8),
            _ => out.push(b'?'),
        }
    }
    out
}
