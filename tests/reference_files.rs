use assert_approx_eq::assert_approx_eq;
use iir_rs::reference::binary::{read_binary, write_binary};
use iir_rs::reference::text::read_text;
use iir_rs::reference::{compare, ReferenceData, ReferenceError};
use iir_rs::util::math::impulse_response;
use std::io::Cursor;

fn sine_inputs(len: usize) -> Vec<f64> {
    (0..len).map(|i| 1500.0 * (i as f64 * 0.075).sin()).collect()
}

#[test]
fn test_text_to_binary() {
    let inputs = sine_inputs(50);
    let line = inputs
        .iter()
        .map(|x| format!("{:.12}", x))
        .collect::<Vec<_>>()
        .join(", ");
    let file = format!(
        "3, {}\n\n1.0, -1.1430, 0.4128\n0.0675, 0.1349, 0.0675\n{}\n",
        inputs.len(),
        line
    );

    let data: ReferenceData<f64> = read_text(file.as_bytes()).unwrap();
    assert_eq!(data.n_coefs(), 3);
    assert_eq!(data.n_inputs(), 50);
    assert_eq!(data.outputs, None);

    let outputs = data.run_single().unwrap();
    let mut buf = Vec::new();
    write_binary(&mut buf, &data, &outputs).unwrap();

    let back: ReferenceData<f64> = read_binary(&mut Cursor::new(buf)).unwrap();
    back.check(&back.run_single().unwrap()).unwrap();
    back.check(&back.run_multi(7).unwrap()).unwrap();
    assert_eq!(compare(&outputs[..], &back.outputs.as_ref().unwrap()[..], 0.0), Ok(()));
}

#[test]
fn test_scaled_coefficients() {
    // Same filter with every coefficient doubled.
    let data = ReferenceData {
        a: vec![2.0_f32, -2.2860, 0.8256],
        b: vec![0.1350, 0.2698, 0.1350],
        inputs: sine_inputs(200).into_iter().map(|x| x as f32).collect(),
        outputs: None,
    };
    let halved = ReferenceData {
        a: data.a.iter().map(|x| x / 2.0).collect(),
        b: data.b.iter().map(|x| x / 2.0).collect(),
        ..data.clone()
    };
    let y = data.run_single().unwrap();
    let y_half = halved.run_single().unwrap();
    for (u, v) in y.iter().zip(y_half.iter()) {
        assert_approx_eq!(*u, *v, 1e-3);
    }
}

#[test]
fn test_impulse_response_reference() {
    let mut data = ReferenceData {
        a: vec![1.0_f64, -0.5],
        b: vec![1.0, 0.0],
        inputs: vec![0.0; 8],
        outputs: None,
    };
    data.inputs[0] = 1.0;
    let expected = impulse_response(&data.b, &data.a, 8).unwrap();
    data.outputs = Some(expected);
    data.check(&data.run_single().unwrap()).unwrap();
    assert_approx_eq!(data.outputs.as_ref().unwrap()[3], 0.125);
}

#[test]
fn test_zero_leading_feedback() {
    let data = ReferenceData {
        a: vec![0.0_f64, 1.0],
        b: vec![1.0, 0.0],
        inputs: vec![1.0],
        outputs: None,
    };
    match data.run_single() {
        Err(ReferenceError::Filter(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}
