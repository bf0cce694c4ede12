//! XLSX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{XlsxError, XlsxResult};
use crate::sheet::SheetExport;
use crate::styles::{XlsxStyleTable, HEADER_XF};
use workboard_core::{CellAddress, MAX_COLS, MAX_ROWS};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write an export to a file path
    pub fn write_file<P: AsRef<Path>>(sheet: &SheetExport, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file)
    }

    /// Write an export into memory
    pub fn to_bytes(sheet: &SheetExport) -> XlsxResult<Vec<u8>> {
        let mut buf = std::io::Cursor::new(Vec::new());
        Self::write(sheet, &mut buf)?;
        Ok(buf.into_inner())
    }

    /// Write an export to a writer
    pub fn write<W: Write + Seek>(sheet: &SheetExport, writer: W) -> XlsxResult<()> {
        if sheet.rows().len() + 1 > MAX_ROWS as usize {
            return Err(XlsxError::InvalidSheet(format!(
                "{} rows exceed the sheet limit",
                sheet.rows().len()
            )));
        }
        if sheet.column_count() > MAX_COLS as usize {
            return Err(XlsxError::InvalidSheet(format!(
                "{} columns exceed the sheet limit",
                sheet.column_count()
            )));
        }

        let mut zip = zip::ZipWriter::new(writer);
        let style_table = XlsxStyleTable::build(sheet);

        Self::write_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES)?;
        Self::write_part(&mut zip, "_rels/.rels", ROOT_RELS)?;
        Self::write_part(&mut zip, "xl/workbook.xml", &Self::workbook_xml(sheet))?;
        Self::write_part(&mut zip, "xl/_rels/workbook.xml.rels", WORKBOOK_RELS)?;
        Self::write_part(&mut zip, "xl/styles.xml", &style_table.to_styles_xml())?;
        Self::write_part(
            &mut zip,
            "xl/worksheets/sheet1.xml",
            &Self::worksheet_xml(sheet, &style_table),
        )?;

        zip.finish()?;
        debug!(sheet = sheet.name(), rows = sheet.rows().len(), "wrote xlsx export");
        Ok(())
    }

    fn write_part<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        name: &str,
        content: &str,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn workbook_xml(sheet: &SheetExport) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>
        <sheet name="{}" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#,
            Self::escape_xml(sheet.name())
        )
    }

    fn worksheet_xml(sheet: &SheetExport, style_table: &XlsxStyleTable) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        // Freeze the header row
        content.push_str(
            r#"
    <sheetViews>
        <sheetView workbookViewId="0">
            <pane ySplit="1" topLeftCell="A2" activePane="bottomLeft" state="frozen"/>
        </sheetView>
    </sheetViews>
    <sheetData>"#,
        );

        Self::push_row(&mut content, 0, sheet.header(), HEADER_XF);
        for (i, cells) in sheet.rows().iter().enumerate() {
            let xf = style_table.xf_for(sheet.fill(i));
            Self::push_row(&mut content, i as u32 + 1, cells, xf);
        }

        content.push_str("\n    </sheetData>\n</worksheet>");
        content
    }

    fn push_row(content: &mut String, row: u32, cells: &[String], xf: u32) {
        let style_attr = if xf != 0 {
            format!(" s=\"{}\"", xf)
        } else {
            String::new()
        };

        content.push_str(&format!("\n        <row r=\"{}\">", row + 1));
        for (col, text) in cells.iter().enumerate() {
            let cell_ref = CellAddress::new(row, col as u16).to_a1_string();
            if text.is_empty() {
                // Keep the fill on blank cells so the row tint is unbroken
                if xf != 0 {
                    content.push_str(&format!("\n            <c r=\"{}\"{}/>", cell_ref, style_attr));
                }
                continue;
            }
            content.push_str(&format!(
                "\n            <c r=\"{}\"{} t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
                cell_ref,
                style_attr,
                Self::escape_xml(text)
            ));
        }
        content.push_str("\n        </row>");
    }

    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;
