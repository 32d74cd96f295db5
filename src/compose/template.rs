//! Slide templates: the shared chrome of content, cover and closing slides.

use super::primitives::{add_page_number, add_title, draw_bar, draw_chip, fill_background};
use crate::common::unit::inches_to_emu;
use crate::common::{Rect, Result, RgbColor};
use crate::pptx::{Align, Geometry, Presentation, Slide};
use crate::theme::{ColorToken, Theme};

/// A full-width horizontal bar at the given top edge.
fn full_width(theme: &Theme, top_in: f64, height_in: f64) -> Rect {
    Rect::new(
        0,
        inches_to_emu(top_in),
        theme.canvas_width,
        inches_to_emu(height_in),
    )
}

/// Append a content slide: white page, navy header band with the title,
/// accent rule underneath, footer rule and page number.
///
/// The body area between the rules is left empty for the caller.
pub fn content_slide<'a>(
    prs: &'a mut Presentation,
    theme: &Theme,
    title: &str,
    index: usize,
    total: usize,
) -> Result<&'a mut Slide> {
    let slide = prs.add_slide();
    fill_background(slide, theme, ColorToken::Page);
    draw_bar(slide, theme, full_width(theme, 0.0, 1.2), ColorToken::Primary)?;
    draw_bar(slide, theme, full_width(theme, 1.2, 0.06), ColorToken::Accent)?;
    add_title(
        slide,
        theme,
        title,
        Rect::from_inches(0.6, 0.2, 12.0, 0.9),
        34.0,
        ColorToken::Page,
    )?;
    draw_bar(
        slide,
        theme,
        Rect::from_inches(0.5, 7.1, 12.333, 0.02),
        ColorToken::Primary,
    )?;
    add_page_number(slide, theme, index, total);
    Ok(slide)
}

/// One line of the cover credit block.
#[derive(Debug, Clone)]
pub struct CoverLine {
    pub text: String,
    pub size: f64,
    pub color: ColorToken,
}

impl CoverLine {
    pub fn new(text: &str, size: f64, color: ColorToken) -> Self {
        Self {
            text: text.to_string(),
            size,
            color,
        }
    }
}

/// Text content of a cover slide.
#[derive(Debug, Clone)]
pub struct CoverContent {
    pub title: String,
    pub subtitle: String,
    pub footer_lines: Vec<CoverLine>,
}

/// Append a cover slide: navy page, two accent rules framing the centered
/// title and subtitle, then a centered credit block.
pub fn cover_slide<'a>(
    prs: &'a mut Presentation,
    theme: &Theme,
    content: &CoverContent,
) -> Result<&'a mut Slide> {
    let slide = prs.add_slide();
    fill_background(slide, theme, ColorToken::Primary);
    draw_bar(slide, theme, full_width(theme, 2.0, 0.08), ColorToken::Accent)?;

    let title_rect = Rect::from_inches(1.5, 2.4, 10.3, 1.5);
    theme.ensure_on_canvas(&title_rect)?;
    let frame = slide.add_text_box(title_rect);
    let para = frame.add_paragraph();
    para.align = Align::Center;
    para.add_run(
        &content.title,
        52.0,
        true,
        theme.resolve(ColorToken::Page),
        &theme.font,
    );
    let para = frame.add_paragraph();
    para.align = Align::Center;
    para.space_before = Some(12.0);
    para.add_run(
        &content.subtitle,
        26.0,
        false,
        theme.resolve(ColorToken::Accent),
        &theme.font,
    );

    draw_bar(slide, theme, full_width(theme, 4.2, 0.08), ColorToken::Accent)?;

    let credit_rect = Rect::from_inches(1.5, 4.8, 10.3, 1.5);
    theme.ensure_on_canvas(&credit_rect)?;
    let frame = slide.add_text_box(credit_rect);
    for (index, line) in content.footer_lines.iter().enumerate() {
        let para = frame.add_paragraph();
        para.align = Align::Center;
        if index > 0 {
            para.space_before = Some(16.0);
        }
        para.add_run(
            &line.text,
            line.size,
            false,
            theme.resolve(line.color),
            &theme.font,
        );
    }
    Ok(slide)
}

/// One numbered takeaway of a closing slide.
#[derive(Debug, Clone)]
pub struct ClosingMessage {
    /// Label inside the accent circle, usually "1", "2", "3"
    pub tag: String,
    pub heading: String,
    pub detail_lines: Vec<String>,
}

impl ClosingMessage {
    pub fn new(tag: &str, heading: &str, detail_lines: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            heading: heading.to_string(),
            detail_lines: detail_lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Text content of a closing slide.
#[derive(Debug, Clone)]
pub struct ClosingContent {
    pub title: String,
    pub messages: Vec<ClosingMessage>,
    pub thanks: String,
}

/// Append a closing slide: navy page, centered title between accent rules,
/// numbered takeaways, and a thank-you line at the bottom.
pub fn closing_slide<'a>(
    prs: &'a mut Presentation,
    theme: &Theme,
    content: &ClosingContent,
) -> Result<&'a mut Slide> {
    let slide = prs.add_slide();
    fill_background(slide, theme, ColorToken::Primary);
    draw_bar(slide, theme, full_width(theme, 0.8, 0.06), ColorToken::Accent)?;

    let title_rect = Rect::from_inches(1.0, 1.0, 11.3, 0.9);
    theme.ensure_on_canvas(&title_rect)?;
    let frame = slide.add_text_box(title_rect);
    let para = frame.add_paragraph();
    para.align = Align::Center;
    para.add_run(
        &content.title,
        42.0,
        true,
        theme.resolve(ColorToken::Page),
        &theme.font,
    );

    let detail_color = ColorToken::Custom(RgbColor::new(0xCC, 0xCC, 0xCC));
    for (index, message) in content.messages.iter().enumerate() {
        let top = 2.2 + index as f64 * 1.6;

        let badge = draw_chip(
            slide,
            theme,
            Rect::from_inches(1.0, top, 0.6, 0.6),
            Geometry::Oval,
            ColorToken::Accent,
        )?;
        let para = badge.add_paragraph();
        para.align = Align::Center;
        para.add_run(
            &message.tag,
            24.0,
            true,
            theme.resolve(ColorToken::Page),
            &theme.font,
        );

        let heading_rect = Rect::from_inches(1.9, top - 0.05, 9.5, 0.5);
        theme.ensure_on_canvas(&heading_rect)?;
        let frame = slide.add_text_box(heading_rect);
        let para = frame.add_paragraph();
        para.add_run(
            &message.heading,
            24.0,
            true,
            theme.resolve(ColorToken::Accent),
            &theme.font,
        );

        let detail_rect = Rect::from_inches(1.9, top + 0.5, 9.5, 1.0);
        theme.ensure_on_canvas(&detail_rect)?;
        let frame = slide.add_text_box(detail_rect);
        for line in &message.detail_lines {
            let para = frame.add_paragraph();
            para.space_after = Some(3.0);
            para.add_run(
                &format!("  {line}"),
                16.0,
                false,
                theme.resolve(detail_color),
                &theme.font,
            );
        }
    }

    draw_bar(slide, theme, full_width(theme, 6.6, 0.06), ColorToken::Accent)?;

    let thanks_rect = Rect::from_inches(1.0, 6.8, 11.3, 0.6);
    theme.ensure_on_canvas(&thanks_rect)?;
    let frame = slide.add_text_box(thanks_rect);
    let para = frame.add_paragraph();
    para.align = Align::Center;
    para.add_run(
        &content.thanks,
        30.0,
        true,
        theme.resolve(ColorToken::Page),
        &theme.font,
    );
    Ok(slide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::Shape;

    #[test]
    fn test_content_slide_chrome() {
        let theme = Theme::business();
        let mut prs = Presentation::new(theme.canvas_width, theme.canvas_height);
        let slide = content_slide(&mut prs, &theme, "시장 동향", 3, 18).unwrap();
        assert_eq!(slide.background(), Some(theme.page));
        // header bar, accent rule, title, footer rule, page number
        assert_eq!(slide.shape_count(), 5);
        match &slide.shapes()[2] {
            Shape::TextBox(text_box) => assert_eq!(text_box.frame.text(), "시장 동향"),
            other => panic!("unexpected shape {other:?}"),
        }
        match &slide.shapes()[4] {
            Shape::TextBox(text_box) => assert_eq!(text_box.frame.text(), "3 / 18"),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_cover_slide_layout() {
        let theme = Theme::business();
        let mut prs = Presentation::new(theme.canvas_width, theme.canvas_height);
        let content = CoverContent {
            title: "수소 에너지".to_string(),
            subtitle: "미래 에너지의 핵심".to_string(),
            footer_lines: vec![
                CoverLine::new("발표자", 22.0, ColorToken::Custom(RgbColor::new(0xBB, 0xBB, 0xBB))),
                CoverLine::new("2024", 18.0, ColorToken::Custom(RgbColor::new(0x99, 0x99, 0x99))),
            ],
        };
        let slide = cover_slide(&mut prs, &theme, &content).unwrap();
        assert_eq!(slide.background(), Some(theme.primary));
        // two rules, title block, credit block
        assert_eq!(slide.shape_count(), 4);
        match &slide.shapes()[1] {
            Shape::TextBox(text_box) => {
                assert_eq!(text_box.frame.paragraphs.len(), 2);
                assert_eq!(text_box.frame.paragraphs[1].space_before, Some(12.0));
            }
            other => panic!("unexpected shape {other:?}"),
        }
        match &slide.shapes()[3] {
            Shape::TextBox(text_box) => {
                assert_eq!(text_box.frame.paragraphs[0].space_before, None);
                assert_eq!(text_box.frame.paragraphs[1].space_before, Some(16.0));
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_closing_slide_messages() {
        let theme = Theme::business();
        let mut prs = Presentation::new(theme.canvas_width, theme.canvas_height);
        let content = ClosingContent {
            title: "결론".to_string(),
            messages: vec![
                ClosingMessage::new("1", "첫 번째 메시지", &["상세 설명"]),
                ClosingMessage::new("2", "두 번째 메시지", &["상세 설명", "추가 설명"]),
            ],
            thanks: "감사합니다".to_string(),
        };
        let slide = closing_slide(&mut prs, &theme, &content).unwrap();
        // rule, title, 2 x (badge + heading + detail), rule, thanks
        assert_eq!(slide.shape_count(), 10);
        match &slide.shapes()[2] {
            Shape::Auto(auto) => {
                assert_eq!(auto.geometry, Geometry::Oval);
                assert_eq!(auto.text.as_ref().unwrap().text(), "1");
            }
            other => panic!("unexpected shape {other:?}"),
        }
        match &slide.shapes()[7] {
            Shape::TextBox(text_box) => {
                assert_eq!(text_box.frame.paragraphs.len(), 2);
                assert!(text_box.frame.text().starts_with("  상세"));
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }
}
