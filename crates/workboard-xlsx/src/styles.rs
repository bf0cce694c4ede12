//! Style table for an export: a default format, a bold header and one
//! solid-fill format per distinct row color.

use std::collections::HashMap;

use crate::sheet::SheetExport;
use workboard_core::Color;

/// xf index of the bold header format
pub(crate) const HEADER_XF: u32 = 1;

pub(crate) struct XlsxStyleTable {
    /// Distinct fill colors in first-use order
    fills: Vec<Color>,
    fill_xf: HashMap<Color, u32>,
}

impl XlsxStyleTable {
    pub(crate) fn build(sheet: &SheetExport) -> Self {
        let mut fills = Vec::new();
        let mut fill_xf = HashMap::new();
        for index in 0..sheet.rows().len() {
            if let Some(color) = sheet.fill(index) {
                if !fill_xf.contains_key(&color) {
                    // xf 0 = default, xf 1 = header
                    fill_xf.insert(color, fills.len() as u32 + 2);
                    fills.push(color);
                }
            }
        }
        Self { fills, fill_xf }
    }

    /// xf index for a data row with `fill`
    pub(crate) fn xf_for(&self, fill: Option<Color>) -> u32 {
        fill.and_then(|c| self.fill_xf.get(&c).copied()).unwrap_or(0)
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <fonts count="2">
    <font><sz val="11"/><name val="Calibri"/></font>
    <font><b/><sz val="11"/><name val="Calibri"/></font>
  </fonts>"#,
        );

        // The first two fills are reserved: none and gray125
        xml.push_str(&format!("\n  <fills count=\"{}\">", self.fills.len() + 2));
        xml.push_str("\n    <fill><patternFill patternType=\"none\"/></fill>");
        xml.push_str("\n    <fill><patternFill patternType=\"gray125\"/></fill>");
        for color in &self.fills {
            xml.push_str(&format!(
                "\n    <fill><patternFill patternType=\"solid\"><fgColor rgb=\"{}\"/><bgColor indexed=\"64\"/></patternFill></fill>",
                color.to_argb_hex()
            ));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(
            r#"
  <borders count="1">
    <border><left/><right/><top/><bottom/><diagonal/></border>
  </borders>
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.fills.len() + 2));
        xml.push_str("\n    <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>");
        xml.push_str(
            "\n    <xf numFmtId=\"0\" fontId=\"1\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyFont=\"1\"/>",
        );
        for i in 0..self.fills.len() {
            xml.push_str(&format!(
                "\n    <xf numFmtId=\"0\" fontId=\"0\" fillId=\"{}\" borderId=\"0\" xfId=\"0\" applyFill=\"1\"/>",
                i + 2
            ));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
</styleSheet>"#,
        );
        xml
    }
}
