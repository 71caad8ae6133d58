use lopdf::Object;
use lopdf::content::Operation;
use pdf_drawing::constants::PT_PER_PX;
use pdf_drawing::render::{DashPattern, PageCanvas, render_drawing, render_page};
use pdf_drawing::*;

fn floats(op: &Operation) -> Vec<f32> {
    op.operands.iter().map(|o| o.as_float().unwrap()).collect()
}

fn operators(canvas: &PageCanvas) -> Vec<&str> {
    canvas
        .operations()
        .iter()
        .map(|op| op.operator.as_str())
        .collect()
}

fn find<'a>(canvas: &'a PageCanvas, operator: &str) -> &'a Operation {
    canvas
        .operations()
        .iter()
        .find(|op| op.operator == operator)
        .unwrap_or_else(|| panic!("no {} operator", operator))
}

fn dash_array(op: &Operation) -> (Vec<f32>, f32) {
    let array = op.operands[0]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o.as_float().unwrap())
        .collect();
    (array, op.operands[1].as_float().unwrap())
}

#[test]
fn test_solid_line() {
    let mut canvas = PageCanvas::new();
    let line = DottedLine::solid(Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0), 2.5);
    render_drawing(&mut canvas, &line.into()).unwrap();

    assert_eq!(operators(&canvas), vec!["w", "d", "m", "l", "S"]);
    assert_eq!(floats(find(&canvas, "w")), vec![2.5]);
    assert_eq!(dash_array(find(&canvas, "d")), (vec![], 0.0));
    assert_eq!(floats(find(&canvas, "m")), vec![1.0, 2.0]);
    assert_eq!(floats(find(&canvas, "l")), vec![3.0, 4.0]);
}

#[test]
fn test_dotted_line_dash_pattern() {
    let mut canvas = PageCanvas::new();
    let line = DottedLine::dotted(Coordinate::new(0.0, 0.0), Coordinate::new(100.0, 0.0), 1.0, 5.0);
    render_drawing(&mut canvas, &line.into()).unwrap();

    assert_eq!(dash_array(find(&canvas, "d")), (vec![1.0, 5.0], 0.0));
}

#[test]
fn test_dash_pattern_for_line() {
    let start = Coordinate::default();
    let end = Coordinate::new(10.0, 10.0);

    let solid = DottedLine::solid(start, end, 1.0);
    assert_eq!(DashPattern::for_line(&solid).unwrap(), DashPattern::solid());

    let dotted = DottedLine::dotted(start, end, 1.0, 7.5);
    let pattern = DashPattern::for_line(&dotted).unwrap();
    assert_eq!(pattern.array, vec![1.0, 7.5]);
    assert_eq!(pattern.phase, 0.0);
}

#[test]
fn test_unknown_line_style() {
    let mut line = DottedLine::solid(Coordinate::default(), Coordinate::new(1.0, 1.0), 1.0);
    line.style = "dashed".to_string();

    let mut canvas = PageCanvas::new();
    let err = render_drawing(&mut canvas, &line.into()).unwrap_err();
    assert!(matches!(err, RenderError::UnknownLineStyle(ref s) if s == "dashed"));
    assert!(canvas.operations().is_empty());
}

#[test]
fn test_text_alignment_offsets() {
    let width = pdf_drawing::font::FONT.advance_width("Hello", 14.0).unwrap();

    for (align, expected_x) in [
        (TextAlign::Left, 50.0),
        (TextAlign::Center, 50.0 - width / 2.0),
        (TextAlign::Right, 50.0 - width),
    ] {
        let mut canvas = PageCanvas::new();
        let text = Text::new(Coordinate::new(50.0, 20.0), 14.0, "Hello", align);
        render_drawing(&mut canvas, &text.into()).unwrap();

        let tm = floats(find(&canvas, "Tm"));
        assert_eq!(tm[..4], [1.0, 0.0, 0.0, -1.0]);
        assert!((tm[4] - expected_x).abs() < 1e-4, "{:?}: {}", align, tm[4]);
        assert_eq!(tm[5], 20.0);
    }
}

#[test]
fn test_text_operators() {
    let mut canvas = PageCanvas::new();
    let text = Text::new(Coordinate::new(0.0, 0.0), 9.0, "Höjd", TextAlign::Left);
    render_drawing(&mut canvas, &text.into()).unwrap();

    assert_eq!(operators(&canvas), vec!["BT", "Tf", "Tm", "Tj", "ET"]);

    let tf = find(&canvas, "Tf");
    assert_eq!(tf.operands[0].as_name().unwrap(), b"F1");
    assert_eq!(tf.operands[1].as_float().unwrap(), 9.0);

    match &find(&canvas, "Tj").operands[0] {
        Object::String(bytes, _) => assert_eq!(bytes, &vec![b'H', 0xF6, b'j', b'd']),
        other => panic!("unexpected Tj operand {:?}", other),
    }
}

#[test]
fn test_empty_text() {
    let mut canvas = PageCanvas::new();
    let text = Text::new(Coordinate::new(5.0, 5.0), 12.0, "", TextAlign::Center);
    render_drawing(&mut canvas, &text.into()).unwrap();

    assert_eq!(floats(find(&canvas, "Tm"))[4], 5.0);
}

#[test]
fn test_unknown_text_align() {
    let mut text = Text::new(Coordinate::default(), 12.0, "x", TextAlign::Left);
    text.align = "justify".to_string();

    let mut canvas = PageCanvas::new();
    let err = render_drawing(&mut canvas, &text.into()).unwrap_err();
    assert!(matches!(err, RenderError::UnknownTextAlign(ref s) if s == "justify"));
}

#[test]
fn test_unsupported_glyph() {
    let text = Text::new(Coordinate::default(), 12.0, "→", TextAlign::Left);
    let mut canvas = PageCanvas::new();
    let err = render_drawing(&mut canvas, &text.into()).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedGlyph('→')));
}

#[test]
fn test_nbspace_and_soft_hyphen_rejected() {
    for ch in ['\u{A0}', '\u{AD}'] {
        let text = Text::new(Coordinate::default(), 12.0, format!("10{}km", ch), TextAlign::Center);
        let mut canvas = PageCanvas::new();
        let err = render_drawing(&mut canvas, &text.into()).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedGlyph(c) if c == ch));
        assert!(canvas.operations().is_empty());
    }
}

#[test]
fn test_color_box_resets_fill_color() {
    let mut canvas = PageCanvas::new();
    let color_box = ColorBox::new(
        Coordinate::new(10.0, 20.0),
        Size::new(30.0, 40.0),
        Color::new(0.2, 0.4, 0.6),
    );
    render_drawing(&mut canvas, &color_box.into()).unwrap();

    assert_eq!(operators(&canvas), vec!["re", "rg", "f", "rg"]);
    let ops = canvas.operations();
    assert_eq!(floats(&ops[0]), vec![10.0, 20.0, 30.0, 40.0]);
    assert_eq!(floats(&ops[1]), vec![0.2, 0.4, 0.6]);
    assert_eq!(floats(&ops[3]), vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_out_of_range_color_passes_through() {
    let mut canvas = PageCanvas::new();
    let color_box = ColorBox::new(
        Coordinate::default(),
        Size::new(1.0, 1.0),
        Color::new(1.5, -0.5, 0.0),
    );
    render_drawing(&mut canvas, &color_box.into()).unwrap();
    assert_eq!(floats(&canvas.operations()[1]), vec![1.5, -0.5, 0.0]);
}

#[test]
fn test_render_page_applies_transform_first() {
    let page = Page::new(100.0, 200.0)
        .with_drawing(DottedLine::solid(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            1.0,
        ))
        .with_drawing(ColorBox::new(
            Coordinate::default(),
            Size::new(5.0, 5.0),
            Color::BLACK,
        ));

    let canvas = render_page(0, &page).unwrap();
    let ops = canvas.operations();
    assert_eq!(ops[0].operator, "cm");
    assert_eq!(floats(&ops[0]), vec![PT_PER_PX, 0.0, 0.0, -PT_PER_PX, 0.0, 150.0]);
    assert_eq!(ops.iter().filter(|op| op.operator == "cm").count(), 1);
}

#[test]
fn test_paint_order_preserved() {
    let red = Color::new(1.0, 0.0, 0.0);
    let blue = Color::new(0.0, 0.0, 1.0);
    let page = Page::new(100.0, 100.0)
        .with_drawing(ColorBox::new(Coordinate::default(), Size::new(50.0, 50.0), red))
        .with_drawing(ColorBox::new(
            Coordinate::new(25.0, 25.0),
            Size::new(50.0, 50.0),
            blue,
        ));

    let canvas = render_page(0, &page).unwrap();
    let ops = canvas.operations();

    let fills: Vec<usize> = ops
        .iter()
        .enumerate()
        .filter(|(_, op)| op.operator == "f")
        .map(|(i, _)| i)
        .collect();
    assert_eq!(fills.len(), 2);

    // The color set immediately before the last fill is the visible one on top
    let last_fill_color = floats(&ops[fills[1] - 1]);
    assert_eq!(last_fill_color, vec![0.0, 0.0, 1.0]);
    assert!(fills[0] < fills[1]);
}

#[test]
fn test_color_box_then_text_is_black() {
    let page = Page::new(100.0, 100.0)
        .with_drawing(ColorBox::new(
            Coordinate::default(),
            Size::new(50.0, 50.0),
            Color::new(1.0, 0.0, 0.0),
        ))
        .with_drawing(Text::new(Coordinate::new(5.0, 5.0), 12.0, "A", TextAlign::Left));

    let canvas = render_page(0, &page).unwrap();
    let ops = canvas.operations();
    let bt = ops.iter().position(|op| op.operator == "BT").unwrap();
    let last_rg = ops[..bt]
        .iter()
        .rev()
        .find(|op| op.operator == "rg")
        .unwrap();
    assert_eq!(floats(last_rg), vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_render_page_error_context() {
    let mut bad = DottedLine::solid(Coordinate::default(), Coordinate::new(1.0, 1.0), 1.0);
    bad.style = "wavy".to_string();
    let page = Page::new(10.0, 10.0)
        .with_drawing(Text::new(Coordinate::default(), 10.0, "ok", TextAlign::Left))
        .with_drawing(bad);

    let err = render_page(3, &page).unwrap_err();
    match &err {
        RenderError::Drawing { page, drawing, .. } => {
            assert_eq!(*page, 3);
            assert_eq!(*drawing, 1);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(matches!(err.root_cause(), RenderError::UnknownLineStyle(s) if s == "wavy"));
    assert_eq!(err.to_string(), "Page 3, drawing 1: Unknown style: wavy");
}
