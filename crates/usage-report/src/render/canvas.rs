//! lopdf-backed drawing surface

use crate::constants::{A4_HEIGHT_MM, A4_WIDTH_MM, PAGE_ROTATION_DEGREES, mm_to_pt};
use crate::surface::{DrawingSurface, PageCursor};
use crate::types::{FontStyle, PageIndex, Point, ReportError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::text::{encode_literal, win_ansi_bytes};

/// A fixed set of rotated A4 pages whose content streams are built up
/// through [`DrawingSurface`] calls and serialized once at the end.
#[derive(Debug)]
pub struct PdfCanvas {
    title: String,
    page_width_pt: f32,
    page_height_pt: f32,
    pages: Vec<String>,
    cursor: PageCursor,
}

impl PdfCanvas {
    /// Allocate `page_count` empty pages up front
    pub fn new(page_count: usize, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_width_pt: mm_to_pt(A4_WIDTH_MM),
            page_height_pt: mm_to_pt(A4_HEIGHT_MM),
            pages: vec![String::new(); page_count],
            cursor: PageCursor::default(),
        }
    }

    /// Content stream operations recorded so far for `page`
    pub fn page_operations(&self, page: PageIndex) -> Option<&str> {
        self.pages.get(page.offset()).map(String::as_str)
    }

    fn current_ops(&mut self) -> Result<&mut String> {
        let page = self.cursor.current()?;
        let total = self.pages.len();
        self.pages
            .get_mut(page.offset())
            .ok_or(ReportError::PageOutOfRange {
                page: page.number(),
                total,
            })
    }

    /// Serialize every page into a PDF document.
    ///
    /// Fails if a page is still open.
    pub fn finish(self) -> Result<Vec<u8>> {
        if let Ok(open) = self.cursor.current() {
            return Err(ReportError::PageLeftOpen(open.number()));
        }

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in [FontStyle::Regular, FontStyle::Bold] {
            fonts.set(
                font.resource_name(),
                Object::Reference(add_font(&mut doc, font)),
            );
        }

        let mut kids = Vec::with_capacity(self.pages.len());
        for ops in &self.pages {
            let page_id = self.add_page(&mut doc, pages_id, &fonts, ops);
            kids.push(Object::Reference(page_id));
        }

        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(kids.len() as i64)),
            ("Kids", Object::Array(kids)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        let info_id = doc.add_object(Dictionary::from_iter(vec![
            (
                "Title",
                Object::String(win_ansi_bytes(&self.title), StringFormat::Literal),
            ),
            (
                "Producer",
                Object::String(b"usage-report".to_vec(), StringFormat::Literal),
            ),
        ]));

        doc.trailer.set("Root", Object::Reference(catalog_id));
        doc.trailer.set("Info", Object::Reference(info_id));

        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok(writer)
    }

    fn add_page(
        &self,
        doc: &mut Document,
        pages_id: ObjectId,
        fonts: &Dictionary,
        ops: &str,
    ) -> ObjectId {
        // Rotate the coordinate space so drawing happens in landscape
        let content = format!(
            "q\n0 0 0 RG\n0 0 0 rg\n0 1 -1 0 {} 0 cm\n{}Q\n",
            self.page_width_pt, ops
        );
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts.clone()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_width_pt),
                Object::Real(self.page_height_pt),
            ]),
        );
        page_dict.set("Rotate", Object::Integer(PAGE_ROTATION_DEGREES));
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        doc.add_object(page_dict)
    }
}

fn add_font(doc: &mut Document, font: FontStyle) -> ObjectId {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(font.base_font().as_bytes().to_vec()));
    font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    doc.add_object(font_dict)
}

impl DrawingSurface for PdfCanvas {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn open_page(&mut self, page: PageIndex) -> Result<()> {
        self.cursor.open(page, self.pages.len())
    }

    fn close_page(&mut self) -> Result<()> {
        self.cursor.close().map(|_| ())
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<()> {
        let ops = self.current_ops()?;
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            from.x, from.y, to.x, to.y
        ));
        Ok(())
    }

    fn place_text(&mut self, at: Point, font: FontStyle, size: f32, text: &str) -> Result<()> {
        let ops = self.current_ops()?;
        ops.push_str(&format!(
            "BT /{} {} Tf {} {} Td ({}) Tj ET\n",
            font.resource_name(),
            size,
            at.x,
            at.y,
            encode_literal(text)
        ));
        Ok(())
    }
}
