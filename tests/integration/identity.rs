// Equality and printing of mutable containers
use crate::common::show;

#[test]
fn test_arrays_and_tables_compare_by_identity() {
    assert_eq!(show("(= @[1] @[1])"), "false");
    assert_eq!(show("(= @{:a 1} @{:a 1})"), "false");
    assert_eq!(show("(def a @[1]) (= a a)"), "true");
    assert_eq!(show("(def t @{}) (def u t) (= t u)"), "true");
}

#[test]
fn test_immutable_data_compares_by_value() {
    assert_eq!(show("(= [1 2] [1 2])"), "true");
    assert_eq!(show("(= {:a [1]} {:a [1]})"), "true");
    assert_eq!(show("(def a @[]) (= [a] [a])"), "true");
    assert_eq!(show("(= [@[]] [@[]])"), "false");
}

#[test]
fn test_self_containing_tables_compare() {
    let setup = "(def a @{}) (put a :self a) (def b @{}) (put b :self b)";
    assert_eq!(show(&format!("{} (= a b)", setup)), "false");
    assert_eq!(show(&format!("{} (= a a)", setup)), "true");
    assert_eq!(show(&format!("{} (= a (get a :self))", setup)), "true");
}

#[test]
fn test_self_containing_containers_print() {
    assert_eq!(show("(def a @{}) (put a :self a) a"), "@{:self <cycle>}");
    assert_eq!(show("(def a @[1]) (put a 1 a) a"), "@[1 <cycle>]");
    assert_eq!(
        show("(def a @[]) (def t @{:a a}) (put a 0 t) t"),
        "@{:a @[<cycle>]}"
    );
}

#[test]
fn test_shared_container_prints_twice() {
    assert_eq!(show("(def a @[1]) @[a a]"), "@[@[1] @[1]]");
}
