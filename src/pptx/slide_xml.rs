//! Slide part serialization: model shapes to PresentationML.

use super::parts::{NS_DRAWING, NS_PRESENTATION, NS_RELATIONSHIPS};
use crate::error::{Error, Result};
use crate::geometry::{centipoints, emu, Rect};
use crate::model::{Paragraph, Shape, ShapeKind, Slide, TextAlignment, TextFrame};
use crate::theme::Color;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

type XmlWriter = Writer<Vec<u8>>;

/// Serialize one slide to a `ppt/slides/slideN.xml` part.
pub fn slide_xml(slide: &Slide) -> Result<Vec<u8>> {
    let mut w = Writer::new(Vec::new());
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut sld = BytesStart::new("p:sld");
    sld.push_attribute(("xmlns:a", NS_DRAWING));
    sld.push_attribute(("xmlns:r", NS_RELATIONSHIPS));
    sld.push_attribute(("xmlns:p", NS_PRESENTATION));
    w.write_event(Event::Start(sld))?;

    w.write_event(Event::Start(BytesStart::new("p:cSld")))?;

    if let Some(bg) = slide.background {
        write_background(&mut w, bg)?;
    }

    w.write_event(Event::Start(BytesStart::new("p:spTree")))?;
    write_group_properties(&mut w)?;

    // Shape id 1 belongs to the group; drawn shapes start at 2
    for (i, shape) in slide.shapes.iter().enumerate() {
        write_shape(&mut w, shape, i as u32 + 2)?;
    }

    w.write_event(Event::End(BytesEnd::new("p:spTree")))?;
    w.write_event(Event::End(BytesEnd::new("p:cSld")))?;

    w.write_event(Event::Start(BytesStart::new("p:clrMapOvr")))?;
    w.write_event(Event::Empty(BytesStart::new("a:masterClrMapping")))?;
    w.write_event(Event::End(BytesEnd::new("p:clrMapOvr")))?;

    w.write_event(Event::End(BytesEnd::new("p:sld")))?;
    Ok(w.into_inner())
}

/// `p:bg` with a solid fill.
fn write_background(w: &mut XmlWriter, color: Color) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new("p:bg")))?;
    w.write_event(Event::Start(BytesStart::new("p:bgPr")))?;
    write_solid_fill(w, "a:solidFill", color)?;
    w.write_event(Event::Empty(BytesStart::new("a:effectLst")))?;
    w.write_event(Event::End(BytesEnd::new("p:bgPr")))?;
    w.write_event(Event::End(BytesEnd::new("p:bg")))?;
    Ok(())
}

/// The mandatory empty group shape heading the shape tree.
fn write_group_properties(w: &mut XmlWriter) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new("p:nvGrpSpPr")))?;
    let mut cnvpr = BytesStart::new("p:cNvPr");
    cnvpr.push_attribute(("id", "1"));
    cnvpr.push_attribute(("name", ""));
    w.write_event(Event::Empty(cnvpr))?;
    w.write_event(Event::Empty(BytesStart::new("p:cNvGrpSpPr")))?;
    w.write_event(Event::Empty(BytesStart::new("p:nvPr")))?;
    w.write_event(Event::End(BytesEnd::new("p:nvGrpSpPr")))?;

    w.write_event(Event::Start(BytesStart::new("p:grpSpPr")))?;
    w.write_event(Event::Start(BytesStart::new("a:xfrm")))?;
    for name in ["a:off", "a:chOff"] {
        let mut el = BytesStart::new(name);
        el.push_attribute(("x", "0"));
        el.push_attribute(("y", "0"));
        w.write_event(Event::Empty(el))?;
    }
    for name in ["a:ext", "a:chExt"] {
        let mut el = BytesStart::new(name);
        el.push_attribute(("cx", "0"));
        el.push_attribute(("cy", "0"));
        w.write_event(Event::Empty(el))?;
    }
    w.write_event(Event::End(BytesEnd::new("a:xfrm")))?;
    w.write_event(Event::End(BytesEnd::new("p:grpSpPr")))?;
    Ok(())
}

fn write_shape(w: &mut XmlWriter, shape: &Shape, id: u32) -> Result<()> {
    if !shape.frame.is_valid() {
        return Err(Error::InvalidGeometry(format!(
            "shape {id} has negative extent: {:?}",
            shape.frame
        )));
    }

    match &shape.kind {
        ShapeKind::Card { fill, line } => write_card(w, id, shape.frame, *fill, *line),
        ShapeKind::TextBox { text } => write_text_box(w, id, shape.frame, text),
    }
}

fn write_card(
    w: &mut XmlWriter,
    id: u32,
    frame: Rect,
    fill: Color,
    line: Option<Color>,
) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new("p:sp")))?;
    write_nv_sp_pr(w, id, "Card", false)?;

    w.write_event(Event::Start(BytesStart::new("p:spPr")))?;
    write_xfrm(w, frame)?;
    write_prst_geom(w)?;
    write_solid_fill(w, "a:solidFill", fill)?;
    w.write_event(Event::Start(BytesStart::new("a:ln")))?;
    match line {
        Some(color) => write_solid_fill(w, "a:solidFill", color)?,
        None => w.write_event(Event::Empty(BytesStart::new("a:noFill")))?,
    }
    w.write_event(Event::End(BytesEnd::new("a:ln")))?;
    w.write_event(Event::End(BytesEnd::new("p:spPr")))?;

    // Autoshapes carry an empty text body
    w.write_event(Event::Start(BytesStart::new("p:txBody")))?;
    w.write_event(Event::Empty(BytesStart::new("a:bodyPr")))?;
    w.write_event(Event::Empty(BytesStart::new("a:lstStyle")))?;
    w.write_event(Event::Empty(BytesStart::new("a:p")))?;
    w.write_event(Event::End(BytesEnd::new("p:txBody")))?;

    w.write_event(Event::End(BytesEnd::new("p:sp")))?;
    Ok(())
}

fn write_text_box(w: &mut XmlWriter, id: u32, frame: Rect, text: &TextFrame) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new("p:sp")))?;
    write_nv_sp_pr(w, id, "TextBox", true)?;

    w.write_event(Event::Start(BytesStart::new("p:spPr")))?;
    write_xfrm(w, frame)?;
    write_prst_geom(w)?;
    w.write_event(Event::Empty(BytesStart::new("a:noFill")))?;
    w.write_event(Event::End(BytesEnd::new("p:spPr")))?;

    w.write_event(Event::Start(BytesStart::new("p:txBody")))?;
    let mut body_pr = BytesStart::new("a:bodyPr");
    body_pr.push_attribute(("wrap", if text.word_wrap { "square" } else { "none" }));
    w.write_event(Event::Empty(body_pr))?;
    w.write_event(Event::Empty(BytesStart::new("a:lstStyle")))?;

    if text.paragraphs.is_empty() {
        // The schema requires at least one paragraph; an empty one renders
        // nothing, which is the guarded empty-bullet behavior
        w.write_event(Event::Empty(BytesStart::new("a:p")))?;
    } else {
        for para in &text.paragraphs {
            write_paragraph(w, para)?;
        }
    }

    w.write_event(Event::End(BytesEnd::new("p:txBody")))?;
    w.write_event(Event::End(BytesEnd::new("p:sp")))?;
    Ok(())
}

fn write_paragraph(w: &mut XmlWriter, para: &Paragraph) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new("a:p")))?;

    let algn = match para.alignment {
        TextAlignment::Left => None,
        TextAlignment::Center => Some("ctr"),
        TextAlignment::Right => Some("r"),
    };
    if algn.is_some() || para.space_after.is_some() {
        let mut ppr = BytesStart::new("a:pPr");
        if let Some(algn) = algn {
            ppr.push_attribute(("algn", algn));
        }
        if let Some(points) = para.space_after {
            w.write_event(Event::Start(ppr))?;
            w.write_event(Event::Start(BytesStart::new("a:spcAft")))?;
            let mut pts = BytesStart::new("a:spcPts");
            pts.push_attribute(("val", centipoints(points).to_string().as_str()));
            w.write_event(Event::Empty(pts))?;
            w.write_event(Event::End(BytesEnd::new("a:spcAft")))?;
            w.write_event(Event::End(BytesEnd::new("a:pPr")))?;
        } else {
            w.write_event(Event::Empty(ppr))?;
        }
    }

    for run in &para.runs {
        w.write_event(Event::Start(BytesStart::new("a:r")))?;

        let mut rpr = BytesStart::new("a:rPr");
        rpr.push_attribute(("lang", "en-US"));
        rpr.push_attribute(("sz", centipoints(run.size).to_string().as_str()));
        if run.bold {
            rpr.push_attribute(("b", "1"));
        }
        rpr.push_attribute(("dirty", "0"));
        w.write_event(Event::Start(rpr))?;
        write_solid_fill(w, "a:solidFill", run.color)?;
        w.write_event(Event::End(BytesEnd::new("a:rPr")))?;

        w.write_event(Event::Start(BytesStart::new("a:t")))?;
        w.write_event(Event::Text(BytesText::new(&run.text)))?;
        w.write_event(Event::End(BytesEnd::new("a:t")))?;

        w.write_event(Event::End(BytesEnd::new("a:r")))?;
    }

    w.write_event(Event::End(BytesEnd::new("a:p")))?;
    Ok(())
}

fn write_nv_sp_pr(w: &mut XmlWriter, id: u32, kind: &str, tx_box: bool) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new("p:nvSpPr")))?;
    let mut cnvpr = BytesStart::new("p:cNvPr");
    cnvpr.push_attribute(("id", id.to_string().as_str()));
    cnvpr.push_attribute(("name", format!("{kind} {id}").as_str()));
    w.write_event(Event::Empty(cnvpr))?;
    let mut cnvsppr = BytesStart::new("p:cNvSpPr");
    if tx_box {
        cnvsppr.push_attribute(("txBox", "1"));
    }
    w.write_event(Event::Empty(cnvsppr))?;
    w.write_event(Event::Empty(BytesStart::new("p:nvPr")))?;
    w.write_event(Event::End(BytesEnd::new("p:nvSpPr")))?;
    Ok(())
}

fn write_xfrm(w: &mut XmlWriter, frame: Rect) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new("a:xfrm")))?;
    let mut off = BytesStart::new("a:off");
    off.push_attribute(("x", emu(frame.left).to_string().as_str()));
    off.push_attribute(("y", emu(frame.top).to_string().as_str()));
    w.write_event(Event::Empty(off))?;
    let mut ext = BytesStart::new("a:ext");
    ext.push_attribute(("cx", emu(frame.width).to_string().as_str()));
    ext.push_attribute(("cy", emu(frame.height).to_string().as_str()));
    w.write_event(Event::Empty(ext))?;
    w.write_event(Event::End(BytesEnd::new("a:xfrm")))?;
    Ok(())
}

fn write_prst_geom(w: &mut XmlWriter) -> Result<()> {
    let mut geom = BytesStart::new("a:prstGeom");
    geom.push_attribute(("prst", "rect"));
    w.write_event(Event::Start(geom))?;
    w.write_event(Event::Empty(BytesStart::new("a:avLst")))?;
    w.write_event(Event::End(BytesEnd::new("a:prstGeom")))?;
    Ok(())
}

fn write_solid_fill(w: &mut XmlWriter, element: &str, color: Color) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(element)))?;
    let mut clr = BytesStart::new("a:srgbClr");
    clr.push_attribute(("val", color.hex().as_str()));
    w.write_event(Event::Empty(clr))?;
    w.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}
