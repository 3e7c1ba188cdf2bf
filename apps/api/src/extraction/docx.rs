//! Word (`.docx`) text via `docx-rs`.
//!
//! Emits headers, then the body, then footers. Inside each part it walks
//! paragraphs, tables, content controls, hyperlinks and tracked insertions in
//! document order.
//! Images and other embedded objects are skipped. Each paragraph ends with a
//! newline so the last word of one paragraph never fuses with the next.

use std::fs;
use std::path::Path;

use docx_rs::{
    DocumentChild, FooterChild, HeaderChild, InsertChild, Paragraph, ParagraphChild, Run,
    RunChild, SectionProperty, StructuredDataTag, StructuredDataTagChild, Table,
    TableCellContent, TableChild, TableRowChild,
};

use super::ExtractionError;

pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let buffer = fs::read(path)?;
    let docx = docx_rs::read_docx(&buffer).map_err(|e| ExtractionError::Docx(e.to_string()))?;
    let document = &docx.document;

    let mut text = String::new();
    push_headers(&mut text, &document.section_property);
    for child in &document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(&mut text, p),
            DocumentChild::Table(t) => push_table(&mut text, t),
            DocumentChild::StructuredDataTag(tag) => push_block_tag(&mut text, tag),
            _ => {}
        }
    }
    push_footers(&mut text, &document.section_property);
    Ok(text)
}

fn push_headers(out: &mut String, section: &SectionProperty) {
    let headers = [&section.header, &section.first_header, &section.even_header];
    for (_, header) in headers.into_iter().flatten() {
        for child in &header.children {
            match child {
                HeaderChild::Paragraph(p) => push_paragraph(out, p),
                HeaderChild::Table(t) => push_table(out, t),
                HeaderChild::StructuredDataTag(tag) => push_block_tag(out, tag),
            }
        }
    }
}

fn push_footers(out: &mut String, section: &SectionProperty) {
    let footers = [&section.footer, &section.first_footer, &section.even_footer];
    for (_, footer) in footers.into_iter().flatten() {
        for child in &footer.children {
            match child {
                FooterChild::Paragraph(p) => push_paragraph(out, p),
                FooterChild::Table(t) => push_table(out, t),
                FooterChild::StructuredDataTag(tag) => push_block_tag(out, tag),
            }
        }
    }
}

fn push_paragraph(out: &mut String, paragraph: &Paragraph) {
    push_inline(out, &paragraph.children);
    out.push('\n');
}

/// Paragraph-level content: runs plus everything that can wrap runs.
fn push_inline(out: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(out, run),
            ParagraphChild::Hyperlink(link) => push_inline(out, &link.children),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run(out, run);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(tag) => push_inline_tag(out, tag),
            _ => {}
        }
    }
}

fn push_run(out: &mut String, run: &Run) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

/// Content control wrapping whole paragraphs or tables.
fn push_block_tag(out: &mut String, tag: &StructuredDataTag) {
    for child in &tag.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(out, run),
            StructuredDataTagChild::Paragraph(p) => push_paragraph(out, p),
            StructuredDataTagChild::Table(t) => push_table(out, t),
            StructuredDataTagChild::StructuredDataTag(nested) => push_block_tag(out, nested),
            _ => {}
        }
    }
}

/// Content control inside a paragraph; never adds a paragraph break of its own.
fn push_inline_tag(out: &mut String, tag: &StructuredDataTag) {
    for child in &tag.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(out, run),
            StructuredDataTagChild::StructuredDataTag(nested) => push_inline_tag(out, nested),
            StructuredDataTagChild::Paragraph(p) => push_paragraph(out, p),
            StructuredDataTagChild::Table(t) => push_table(out, t),
            _ => {}
        }
    }
}

fn push_table(out: &mut String, table: &Table) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph(out, p),
                    TableCellContent::Table(nested) => push_table(out, nested),
                    TableCellContent::StructuredDataTag(tag) => push_block_tag(out, tag),
                    TableCellContent::TableOfContents(_) => {}
                }
            }
        }
    }
}
