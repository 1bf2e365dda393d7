use pixelgrid::app::engine::SketchEngine;
use pixelgrid::core::color::Color;
use pixelgrid::core::error::CoreError;

// ---------------------------------------------------------
// 1. 连续绘制后等量撤销应完全还原 & 2. 恢复还原单步状态
// ---------------------------------------------------------
#[test]
fn test_paint_undo_roundtrip() {
    let mut engine = SketchEngine::new();
    let before = engine.snapshot();

    let colors = [
        Color::new(255, 0, 0),
        Color::new(0, 255, 0),
        Color::new(0, 0, 255),
        Color::new(255, 255, 0),
    ];
    // 同一格重复覆盖 + 多个不同格
    engine.paint(0, 0, colors[0]).unwrap();
    engine.paint(0, 0, colors[1]).unwrap();
    engine.paint(3, 5, colors[2]).unwrap();
    engine.paint(7, 7, colors[3]).unwrap();

    for _ in 0..4 {
        engine.undo().unwrap();
    }

    let after = engine.snapshot();
    for ((pos, a), (_, b)) in before.iter().zip(after.iter()) {
        assert_eq!(a, b, "撤销后格子 {:?} 应恢复原状", pos);
    }
    assert_eq!(engine.undo(), Err(CoreError::EmptyHistory));
}

#[test]
fn test_redo_restores_pre_undo_state() {
    let mut engine = SketchEngine::new();
    let red = Color::new(255, 0, 0);
    engine.paint(2, 2, red).unwrap();
    let painted = engine.snapshot();

    engine.undo().unwrap();
    assert_eq!(engine.grid().cell(2, 2).unwrap(), None);

    engine.redo().unwrap();
    assert_eq!(engine.grid().cell(2, 2).unwrap(), Some(red));
    for ((pos, a), (_, b)) in painted.iter().zip(engine.snapshot().iter()) {
        assert_eq!(a, b, "恢复后格子 {:?} 应与撤销前一致", pos);
    }
}

// ---------------------------------------------------------
// 3. 新提交使恢复分支失效
// ---------------------------------------------------------
#[test]
fn test_fresh_edit_invalidates_redo() {
    let mut engine = SketchEngine::new();
    engine.paint(0, 0, Color::new(1, 1, 1)).unwrap();
    engine.paint(1, 0, Color::new(2, 2, 2)).unwrap();
    engine.undo().unwrap();
    engine.undo().unwrap();

    engine.paint(5, 5, Color::new(3, 3, 3)).unwrap();
    assert_eq!(engine.redo(), Err(CoreError::EmptyHistory), "新编辑后恢复栈应被清空");
}

// ---------------------------------------------------------
// 4. 改变画纸大小：全部清空且历史失效
// ---------------------------------------------------------
#[test]
fn test_resize_clears_cells_and_history() {
    let mut engine = SketchEngine::new();
    engine.paint(0, 0, Color::new(9, 9, 9)).unwrap();

    engine.resize(16, 4).unwrap();
    let snap = engine.snapshot();
    assert_eq!(snap.iter().count(), 64);
    assert!(snap.iter().all(|(_, c)| c.is_none()), "改变大小后所有格子应为空");
    assert_eq!(engine.undo(), Err(CoreError::EmptyHistory));
    assert_eq!(engine.redo(), Err(CoreError::EmptyHistory));
}

#[test]
fn test_resize_rejects_zero_dimension() {
    let mut engine = SketchEngine::new();
    assert!(matches!(
        engine.resize(0, 8),
        Err(CoreError::InvalidDimension { .. })
    ));
    // 失败的调整不应影响现有画纸
    assert_eq!(engine.grid().width(), 8);
}

// ---------------------------------------------------------
// 5. 重新开始：格子清空、历史清空、尺寸不变
// ---------------------------------------------------------
#[test]
fn test_reset_keeps_dimensions() {
    let mut engine = SketchEngine::new();
    engine.paint(4, 4, Color::new(7, 7, 7)).unwrap();
    engine.reset();
    assert_eq!(engine.grid().width(), 8);
    assert_eq!(engine.grid().height(), 8);
    assert_eq!(engine.grid().cell(4, 4).unwrap(), None);
    assert_eq!(engine.undo(), Err(CoreError::EmptyHistory));
}

// ---------------------------------------------------------
// 6. 越界绘制是调用方违约，返回错误而不崩溃
// ---------------------------------------------------------
#[test]
fn test_paint_out_of_bounds_is_error() {
    let mut engine = SketchEngine::new();
    assert_eq!(
        engine.paint(8, 8, Color::black()),
        Err(CoreError::OutOfBounds { x: 8, y: 8 })
    );
    assert_eq!(engine.undo(), Err(CoreError::EmptyHistory), "失败的绘制不应留下记录");
}
