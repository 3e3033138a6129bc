use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// Handle to an element of a [`CircularList`].
///
/// A position stays valid until its element is removed. Slots are never
/// reused, so using a position after removal is always detected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

#[derive(Clone, Debug)]
struct Slot<T> {
  value: Option<T>,
  prev: usize,
  next: usize,
}

/// Ordered collection with wrap-around navigation and O(1) removal.
///
/// Elements live in an arena of slots linked by index. Removing an element
/// tombstones its slot and links its neighbours to each other.
///
/// # Panics
///
/// Every method taking a [`Position`] panics if the position was removed or
/// belongs to another list. That is a bug in the caller, not a recoverable
/// condition.
#[derive(Clone, Debug)]
pub struct CircularList<T> {
  slots: Vec<Slot<T>>,
  head: Option<usize>,
  len: usize,
}

impl<T> Default for CircularList<T> {
  fn default() -> Self {
    CircularList::new()
  }
}

impl<T> CircularList<T> {
  pub fn new() -> CircularList<T> {
    CircularList::with_capacity(0)
  }

  pub fn with_capacity(capacity: usize) -> CircularList<T> {
    CircularList {
      slots: Vec::with_capacity(capacity),
      head: None,
      len: 0,
    }
  }

  /// $O(1)$
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// First element in iteration order.
  pub fn head(&self) -> Option<Position> {
    self.head.map(Position)
  }

  pub fn contains(&self, pos: Position) -> bool {
    matches!(self.slots.get(pos.0), Some(slot) if slot.value.is_some())
  }

  pub fn get(&self, pos: Position) -> &T {
    match &self.slot(pos).value {
      Some(value) => value,
      None => unreachable!(),
    }
  }

  pub fn get_mut(&mut self, pos: Position) -> &mut T {
    self.slot(pos);
    match &mut self.slots[pos.0].value {
      Some(value) => value,
      None => unreachable!(),
    }
  }

  /// Following element. The last element is followed by the first.
  pub fn next(&self, pos: Position) -> Position {
    Position(self.slot(pos).next)
  }

  /// Preceding element. The first element is preceded by the last.
  pub fn prev(&self, pos: Position) -> Position {
    Position(self.slot(pos).prev)
  }

  /// Append after the last element.
  pub fn push_back(&mut self, value: T) -> Position {
    match self.head {
      None => {
        let idx = self.slots.len();
        self.slots.push(Slot {
          value: Some(value),
          prev: idx,
          next: idx,
        });
        self.head = Some(idx);
        self.len = 1;
        Position(idx)
      }
      Some(head) => {
        let last = Position(self.slots[head].prev);
        self.insert_after(last, value)
      }
    }
  }

  pub fn insert_after(&mut self, pos: Position, value: T) -> Position {
    let prev = pos.0;
    let next = self.slot(pos).next;
    let idx = self.slots.len();
    self.slots.push(Slot {
      value: Some(value),
      prev,
      next,
    });
    self.slots[prev].next = idx;
    self.slots[next].prev = idx;
    self.len += 1;
    Position(idx)
  }

  /// Insert in front of `pos`. Inserting in front of the head makes the new
  /// element the head.
  pub fn insert_before(&mut self, pos: Position, value: T) -> Position {
    let prev = self.prev(pos);
    let new = self.insert_after(prev, value);
    if self.head == Some(pos.0) {
      self.head = Some(new.0);
    }
    new
  }

  /// Unlink the element at `pos` and return it. Positions of all other
  /// elements stay valid.
  pub fn remove(&mut self, pos: Position) -> T {
    let (prev, next) = {
      let slot = self.slot(pos);
      (slot.prev, slot.next)
    };
    self.slots[prev].next = next;
    self.slots[next].prev = prev;
    self.len -= 1;
    if self.len == 0 {
      self.head = None;
    } else if self.head == Some(pos.0) {
      self.head = Some(next);
    }
    match self.slots[pos.0].value.take() {
      Some(value) => value,
      None => unreachable!(),
    }
  }

  /// Positions in order, starting at the head.
  pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
    self
      .head()
      .into_iter()
      .flat_map(move |head| self.positions_from(head))
  }

  /// Positions in order, starting at `start` and wrapping around once.
  pub fn positions_from(&self, start: Position) -> impl Iterator<Item = Position> + '_ {
    self.slot(start);
    let mut at = start.0;
    let mut remaining = self.len;
    std::iter::from_fn(move || {
      if remaining == 0 {
        return None;
      }
      remaining -= 1;
      let this = at;
      at = self.slots[at].next;
      Some(Position(this))
    })
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    self.positions().map(move |pos| self.get(pos))
  }

  pub fn iter_from(&self, start: Position) -> impl Iterator<Item = &T> + '_ {
    self.positions_from(start).map(move |pos| self.get(pos))
  }

  fn slot(&self, pos: Position) -> &Slot<T> {
    match self.slots.get(pos.0) {
      Some(slot) if slot.value.is_some() => slot,
      _ => panic!("Attempt to use invalid position {:?}.", pos),
    }
  }
}

impl<T> Index<Position> for CircularList<T> {
  type Output = T;
  fn index(&self, pos: Position) -> &T {
    self.get(pos)
  }
}

impl<T> IndexMut<Position> for CircularList<T> {
  fn index_mut(&mut self, pos: Position) -> &mut T {
    self.get_mut(pos)
  }
}

impl<T> FromIterator<T> for CircularList<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let iter = iter.into_iter();
    let mut list = CircularList::with_capacity(iter.size_hint().0);
    for value in iter {
      list.push_back(value);
    }
    list
  }
}

impl<T> Extend<T> for CircularList<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.push_back(value);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn letters() -> CircularList<char> {
    "abcde".chars().collect()
  }

  #[test]
  fn wraps_around() {
    let list = letters();
    let head = list.head().unwrap();
    let last = list.prev(head);
    assert_eq!(list[last], 'e');
    assert_eq!(list.next(last), head);
    assert_eq!(list.len(), 5);
  }

  #[test]
  fn remove_links_neighbours() {
    let mut list = letters();
    let b = list.next(list.head().unwrap());
    let c = list.next(b);
    let d = list.next(c);
    assert_eq!(list.remove(c), 'c');
    assert_eq!(list.next(b), d);
    assert_eq!(list.prev(d), b);
    assert!(!list.contains(c));
    assert_eq!(list.iter().collect::<String>(), "abde");
  }

  #[test]
  fn remove_head_moves_head() {
    let mut list = letters();
    let a = list.head().unwrap();
    let b = list.next(a);
    list.remove(a);
    assert_eq!(list.head(), Some(b));
    assert_eq!(list.iter().collect::<String>(), "bcde");
  }

  #[test]
  fn remove_everything() {
    let mut list = letters();
    while let Some(head) = list.head() {
      list.remove(head);
    }
    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);
  }

  #[test]
  fn single_element_is_its_own_neighbour() {
    let mut list = CircularList::new();
    let only = list.push_back(7);
    assert_eq!(list.next(only), only);
    assert_eq!(list.prev(only), only);
  }

  #[test]
  fn inserts() {
    let mut list = letters();
    let a = list.head().unwrap();
    let c = list.next(list.next(a));
    list.insert_after(c, 'x');
    list.insert_before(c, 'y');
    assert_eq!(list.iter().collect::<String>(), "abycxde");
    let z = list.insert_before(a, 'z');
    assert_eq!(list.head(), Some(z));
    assert_eq!(list.iter().collect::<String>(), "zabycxde");
    assert_eq!(list.len(), 8);
  }

  #[test]
  fn iter_from_any_position() {
    let list = letters();
    let d = list.prev(list.prev(list.head().unwrap()));
    assert_eq!(list.iter_from(d).collect::<String>(), "deabc");
  }

  #[test]
  fn get_mut_updates_in_place() {
    let mut list = letters();
    let a = list.head().unwrap();
    list[a] = 'A';
    *list.get_mut(list.next(a)) = 'B';
    assert_eq!(list.iter().collect::<String>(), "ABcde");
  }

  #[test]
  #[should_panic(expected = "invalid position")]
  fn next_after_remove_panics() {
    let mut list = letters();
    let a = list.head().unwrap();
    list.remove(a);
    list.next(a);
  }

  #[test]
  #[should_panic(expected = "invalid position")]
  fn prev_after_remove_panics() {
    let mut list = letters();
    let a = list.head().unwrap();
    list.remove(a);
    list.prev(a);
  }

  #[test]
  #[should_panic(expected = "invalid position")]
  fn foreign_position_panics() {
    let small: CircularList<char> = "a".chars().collect();
    let big = letters();
    let far = big.prev(big.head().unwrap());
    small.get(far);
  }
}
