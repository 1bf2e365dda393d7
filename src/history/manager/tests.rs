use super::*;
use crate::core::color::Color;
use crate::core::grid::Grid;

#[test]
fn test_history_undo_restores_previous() {
    let mut g = Grid::new(8, 8).unwrap();
    let mut h = HistoryManager::new();
    let red = Color::new(255, 0, 0);
    let edit = g.paint(0, 0, red).unwrap();
    h.commit(edit);
    h.undo(&mut g).unwrap();
    assert_eq!(g.cell(0, 0).unwrap(), None);
}

#[test]
fn test_history_redo_reapplies() {
    let mut g = Grid::new(8, 8).unwrap();
    let mut h = HistoryManager::new();
    let red = Color::new(255, 0, 0);
    h.commit(g.paint(0, 0, red).unwrap());
    h.undo(&mut g).unwrap();
    h.redo(&mut g).unwrap();
    assert_eq!(g.cell(0, 0).unwrap(), Some(red));
}

#[test]
fn test_history_empty_undo_fails() {
    let mut g = Grid::new(8, 8).unwrap();
    let mut h = HistoryManager::new();
    assert_eq!(h.undo(&mut g), Err(CoreError::EmptyHistory));
    assert_eq!(h.redo(&mut g), Err(CoreError::EmptyHistory));
}

#[test]
fn test_history_commit_clears_redo() {
    let mut g = Grid::new(8, 8).unwrap();
    let mut h = HistoryManager::new();
    h.commit(g.paint(0, 0, Color::new(1, 1, 1)).unwrap());
    h.undo(&mut g).unwrap();
    assert!(h.can_redo());
    h.commit(g.paint(1, 1, Color::new(2, 2, 2)).unwrap());
    assert!(!h.can_redo());
    assert_eq!(h.redo(&mut g), Err(CoreError::EmptyHistory));
}

#[test]
fn test_history_undo_does_not_record() {
    let mut g = Grid::new(8, 8).unwrap();
    let mut h = HistoryManager::new();
    h.commit(g.paint(0, 0, Color::new(1, 1, 1)).unwrap());
    h.undo(&mut g).unwrap();
    // 撤销本身不产生新的记录
    assert_eq!(h.undo_stack.len(), 0);
    assert_eq!(h.redo_stack.len(), 1);
}

#[test]
fn test_history_stack_order() {
    let mut g = Grid::new(8, 8).unwrap();
    let mut h = HistoryManager::new();
    let a = Color::new(10, 0, 0);
    let b = Color::new(20, 0, 0);
    h.commit(g.paint(0, 0, a).unwrap());
    h.commit(g.paint(0, 0, b).unwrap());
    h.undo(&mut g).unwrap();
    assert_eq!(g.cell(0, 0).unwrap(), Some(a));
    h.undo(&mut g).unwrap();
    assert_eq!(g.cell(0, 0).unwrap(), None);
}

#[test]
fn test_history_clear() {
    let mut g = Grid::new(8, 8).unwrap();
    let mut h = HistoryManager::new();
    h.commit(g.paint(0, 0, Color::black()).unwrap());
    h.undo(&mut g).unwrap();
    h.clear();
    assert!(!h.can_undo());
    assert!(!h.can_redo());
}
