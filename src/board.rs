//! Board Ordering
//!
//! Pure reordering logic for tasks within and across lists. Optimistic
//! drag-over updates, the drop handler, and remote broadcast events all
//! funnel through `apply_move`, so local and remote edits cannot disagree
//! about what a move means.

use leptos_dragdrop::DropTarget;

use crate::models::{Task, TaskList};

/// A pending relocation, captured when a drag gesture starts and consumed
/// when it ends
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveIntent {
    pub task_id: u32,
    pub source_list_id: u32,
    pub source_position: i32,
    /// Set once the gesture applies a cross-list optimistic mutation
    pub optimistic: bool,
}

impl MoveIntent {
    pub fn new(task_id: u32, source_list_id: u32, source_position: i32) -> Self {
        Self {
            task_id,
            source_list_id,
            source_position,
            optimistic: false,
        }
    }
}

/// Tasks of one list in display order
pub fn tasks_in_list(tasks: &[Task], list_id: u32) -> Vec<Task> {
    let mut in_list: Vec<Task> = tasks.iter().filter(|t| t.list_id == list_id).cloned().collect();
    in_list.sort_by_key(|t| (t.position, t.id));
    in_list
}

/// Lists in display order
pub fn lists_in_order(lists: &[TaskList]) -> Vec<TaskList> {
    let mut ordered = lists.to_vec();
    ordered.sort_by_key(|l| (l.position, l.id));
    ordered
}

/// Current (list_id, index) of a task within the visible sequence
pub fn locate_task(tasks: &[Task], task_id: u32) -> Option<(u32, i32)> {
    let list_id = tasks.iter().find(|t| t.id == task_id)?.list_id;
    let index = tasks_in_list(tasks, list_id)
        .iter()
        .position(|t| t.id == task_id)?;
    Some((list_id, index as i32))
}

fn ordered_ids(tasks: &[Task], list_id: u32) -> Vec<u32> {
    tasks_in_list(tasks, list_id).iter().map(|t| t.id).collect()
}

/// Renumber a list to the given order, 0-based sequential
fn renumber(tasks: &mut [Task], order: &[u32]) -> bool {
    let mut changed = false;
    for (index, id) in order.iter().enumerate() {
        if let Some(task) = tasks.iter_mut().find(|t| t.id == *id) {
            if task.position != index as i32 {
                task.position = index as i32;
                changed = true;
            }
        }
    }
    changed
}

/// Move a task so it lands at exactly `dest_index` (clamped) in the
/// destination list's visible sequence, then renumber the affected lists
/// sequentially. Re-applying the same move is a no-op; the return value
/// reports whether anything changed.
pub fn apply_move(tasks: &mut [Task], task_id: u32, dest_list_id: u32, dest_index: i32) -> bool {
    let Some(source_list_id) = tasks.iter().find(|t| t.id == task_id).map(|t| t.list_id) else {
        return false;
    };

    // Destination order without the moved task, insertion clamped to the end
    let mut dest_order: Vec<u32> = ordered_ids(tasks, dest_list_id)
        .into_iter()
        .filter(|id| *id != task_id)
        .collect();
    let index = (dest_index.max(0) as usize).min(dest_order.len());
    dest_order.insert(index, task_id);

    let mut changed = false;
    if source_list_id != dest_list_id {
        if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
            task.list_id = dest_list_id;
        }
        changed = true;
        // Close the gap the task left behind
        let source_order = ordered_ids(tasks, source_list_id);
        renumber(tasks, &source_order);
    }
    changed |= renumber(tasks, &dest_order);
    changed
}

/// Resolve a drop target to a concrete (list_id, index) insertion point.
/// `None` means the id is stale: the card or column was removed by a
/// concurrent remote change while the drag was in flight.
pub fn resolve_drop(lists: &[TaskList], tasks: &[Task], target: DropTarget) -> Option<(u32, i32)> {
    match target {
        DropTarget::Card(task_id) => locate_task(tasks, task_id),
        DropTarget::Column(list_id) => {
            if !lists.iter().any(|l| l.id == list_id) {
                return None;
            }
            let len = tasks.iter().filter(|t| t.list_id == list_id).count();
            Some((list_id, len as i32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskList};

    fn make_task(id: u32, list_id: u32, position: i32) -> Task {
        Task {
            id,
            list_id,
            title: format!("Task {}", id),
            position,
        }
    }

    fn make_list(id: u32, position: i32) -> TaskList {
        TaskList {
            id,
            board_id: 1,
            title: format!("List {}", id),
            position,
        }
    }

    fn order(tasks: &[Task], list_id: u32) -> Vec<u32> {
        tasks_in_list(tasks, list_id).iter().map(|t| t.id).collect()
    }

    fn assert_sequential(tasks: &[Task], list_id: u32) {
        for (index, task) in tasks_in_list(tasks, list_id).iter().enumerate() {
            assert_eq!(
                task.position, index as i32,
                "task {} out of sequence in list {}",
                task.id, list_id
            );
        }
    }

    /// A = [T1, T2, T3], B = []
    fn two_list_board() -> Vec<Task> {
        vec![
            make_task(1, 10, 0),
            make_task(2, 10, 1),
            make_task(3, 10, 2),
        ]
    }

    #[test]
    fn test_move_across_lists_to_front() {
        let mut tasks = two_list_board();

        let changed = apply_move(&mut tasks, 2, 20, 0);

        assert!(changed);
        assert_eq!(order(&tasks, 10), vec![1, 3]);
        assert_eq!(order(&tasks, 20), vec![2]);
        assert_sequential(&tasks, 10);
        assert_sequential(&tasks, 20);
    }

    #[test]
    fn test_reorder_within_list_to_front() {
        let mut tasks = two_list_board();

        let changed = apply_move(&mut tasks, 3, 10, 0);

        assert!(changed);
        assert_eq!(order(&tasks, 10), vec![3, 1, 2]);
        assert_sequential(&tasks, 10);
    }

    #[test]
    fn test_move_to_later_index_shifts() {
        let mut tasks = two_list_board();

        // T1 leaves index 0, so the earlier tasks close up and T1 lands last
        let changed = apply_move(&mut tasks, 1, 10, 2);

        assert!(changed);
        assert_eq!(order(&tasks, 10), vec![2, 3, 1]);
        assert_sequential(&tasks, 10);
    }

    #[test]
    fn test_relative_order_preserved_in_both_lists() {
        let mut tasks = two_list_board();
        tasks.push(make_task(4, 20, 0));
        tasks.push(make_task(5, 20, 1));

        apply_move(&mut tasks, 1, 20, 0);

        assert_eq!(order(&tasks, 10), vec![2, 3]);
        assert_eq!(order(&tasks, 20), vec![1, 4, 5]);
        assert_sequential(&tasks, 10);
        assert_sequential(&tasks, 20);
    }

    #[test]
    fn test_apply_move_idempotent() {
        let mut tasks = two_list_board();

        assert!(apply_move(&mut tasks, 2, 20, 0));
        let snapshot = tasks.clone();

        // Same event again (e.g. a broadcast echo) changes nothing
        assert!(!apply_move(&mut tasks, 2, 20, 0));
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_drop_at_origin_changes_nothing() {
        let mut tasks = two_list_board();

        assert_eq!(locate_task(&tasks, 2), Some((10, 1)));
        assert!(!apply_move(&mut tasks, 2, 10, 1));
        assert_eq!(order(&tasks, 10), vec![1, 2, 3]);
    }

    #[test]
    fn test_positions_stay_unique() {
        let mut tasks = two_list_board();
        tasks.push(make_task(4, 20, 0));
        tasks.push(make_task(5, 30, 0));

        apply_move(&mut tasks, 1, 20, 1);
        apply_move(&mut tasks, 3, 30, 0);
        apply_move(&mut tasks, 4, 30, 2);
        apply_move(&mut tasks, 1, 10, 0);

        for list_id in [10, 20, 30] {
            assert_sequential(&tasks, list_id);
        }
        assert_eq!(tasks.len(), 5);
    }

    #[test]
    fn test_out_of_range_index_clamps_to_end() {
        let mut tasks = two_list_board();
        tasks.push(make_task(4, 20, 0));

        apply_move(&mut tasks, 1, 20, 99);

        assert_eq!(order(&tasks, 20), vec![4, 1]);
        assert_sequential(&tasks, 20);
    }

    #[test]
    fn test_unknown_task_is_noop() {
        let mut tasks = two_list_board();
        let snapshot = tasks.clone();

        assert!(!apply_move(&mut tasks, 99, 10, 0));
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_lists_in_order() {
        let lists = vec![make_list(20, 1), make_list(10, 0)];

        let ordered = lists_in_order(&lists);

        assert_eq!(ordered[0].id, 10);
        assert_eq!(ordered[1].id, 20);
    }

    #[test]
    fn test_resolve_drop_on_card() {
        let lists = vec![make_list(10, 0)];
        let tasks = two_list_board();

        assert_eq!(
            resolve_drop(&lists, &tasks, DropTarget::Card(3)),
            Some((10, 2))
        );
    }

    #[test]
    fn test_resolve_drop_on_column_appends() {
        let lists = vec![make_list(10, 0), make_list(20, 1)];
        let mut tasks = two_list_board();
        tasks.push(make_task(4, 20, 0));

        assert_eq!(
            resolve_drop(&lists, &tasks, DropTarget::Column(20)),
            Some((20, 1))
        );
        assert_eq!(
            resolve_drop(&lists, &tasks, DropTarget::Column(10)),
            Some((10, 3))
        );
    }

    #[test]
    fn test_resolve_drop_stale_ids() {
        let lists = vec![make_list(10, 0)];
        let tasks = two_list_board();

        // Card or column deleted remotely mid-drag
        assert_eq!(resolve_drop(&lists, &tasks, DropTarget::Card(99)), None);
        assert_eq!(resolve_drop(&lists, &tasks, DropTarget::Column(99)), None);
    }
}
