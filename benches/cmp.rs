#![feature(test)]

extern crate httpmime;
extern crate test;

use httpmime::content_types::TEXT_PLAIN_UTF8;
use httpmime::ContentType;
use test::Bencher;

#[bench]
fn bench_eq_parsed(b: &mut Bencher) {
    let ct = "text/plain; charset=utf-8".parse::<ContentType>().unwrap();
    b.bytes = ct.to_string().len() as u64;
    b.iter(|| {
        assert_eq!(ct, TEXT_PLAIN_UTF8);
    })
}

#[bench]
fn bench_eq_consts(b: &mut Bencher) {
    let ct = TEXT_PLAIN_UTF8;
    b.bytes = ct.to_string().len() as u64;
    b.iter(|| {
        assert_eq!(ct, TEXT_PLAIN_UTF8);
    });
}

#[bench]
fn bench_eq_reordered_params(b: &mut Bencher) {
    let a = "application/vnd.x; a=1; b=2; c=3".parse::<ContentType>().unwrap();
    let z = "application/vnd.x; c=3; b=2; a=1".parse::<ContentType>().unwrap();
    b.iter(|| {
        assert_eq!(a, z);
    });
}
