use id3boosts::prelude::*;
use id3boosts::leave_one_out_accuracy;

use std::env;


fn read(name: &str) -> Dataset {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset");
    path.push(name);
    SampleReader::new()
        .file(path)
        .read()
        .unwrap()
}


#[test]
fn sunny_rainy_is_always_right() {
    let dataset = read("sunny_rainy.txt");
    let accuracy = leave_one_out_accuracy(&dataset);
    assert_eq!(accuracy, Accuracy { correct: 6, total: 6 });
    assert_eq!(accuracy.to_string(), "6 out of 6 correct");
}


#[test]
fn single_outcome_is_always_right() {
    let dataset = read("all_yes.txt");
    let accuracy = leave_one_out_accuracy(&dataset);
    assert_eq!(accuracy.correct, 4);
    assert_eq!(accuracy.total, 4);
}


#[test]
fn total_counts_every_raw_row() {
    for name in ["weather.txt", "sky_wind.txt"] {
        let dataset = read(name);
        let tree = DecisionTreeBuilder::new(&dataset).build();
        let accuracy = LeaveOneOut::new(&dataset)
            .seed(777)
            .run(&tree);
        assert_eq!(accuracy.total, dataset.n_rows());
        assert!(accuracy.correct <= accuracy.total);
    }
}


#[test]
fn same_seed_same_report() {
    let dataset = read("sky_wind.txt");
    let tree = DecisionTreeBuilder::new(&dataset).build();
    let a = LeaveOneOut::new(&dataset).seed(42).run(&tree);
    let b = LeaveOneOut::new(&dataset).seed(42).run(&tree);
    assert_eq!(a, b);
}


#[test]
fn report_serializes_to_json() {
    let accuracy = Accuracy { correct: 9, total: 14 };
    let json = serde_json::to_string(&accuracy).unwrap();
    assert_eq!(json, r#"{"correct":9,"total":14}"#);
}
