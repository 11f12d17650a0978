//! End-to-end recovery tests on a long English reference text.

use vigenere_analysis::{
    break_cipher, cipher, find_key_length, index_of_coincidence, recover_key, recover_shift,
    AnalysisError, FrequencyModel, LetterSequence,
};

/// Gettysburg Address, pre-normalized to uppercase letters (1149 symbols).
const REFERENCE_TEXT: &str = "\
FOURSCOREANDSEVENYEARSAGOOURFATHERSBROUGHTFORTHONTHISCONTINENTANEWNATION\
CONCEIVEDINLIBERTYANDDEDICATEDTOTHEPROPOSITIONTHATALLMENARECREATEDEQUAL\
NOWWEAREENGAGEDINAGREATCIVILWARTESTINGWHETHERTHATNATIONORANYNATIONSO\
CONCEIVEDANDSODEDICATEDCANLONGENDUREWEAREMETONAGREATBATTLEFIELDOFTHATWAR\
WEHAVECOMETODEDICATEAPORTIONOFTHATFIELDASAFINALRESTINGPLACEFORTHOSEWHO\
HEREGAVETHEIRLIVESTHATTHATNATIONMIGHTLIVEITISALTOGETHERFITTINGANDPROPER\
THATWESHOULDDOTHISBUTINALARGERSENSEWECANNOTDEDICATEWECANNOTCONSECRATE\
WECANNOTHALLOWTHISGROUNDTHEBRAVEMENLIVINGANDDEADWHOSTRUGGLEDHEREHAVE\
CONSECRATEDITFARABOVEOURPOORPOWERTOADDORDETRACTTHEWORLDWILLLITTLENOTE\
NORLONGREMEMBERWHATWESAYHEREBUTITCANNEVERFORGETWHATTHEYDIDHEREITISFOR\
USTHELIVINGRATHERTOBEDEDICATEDHERETOTHEUNFINISHEDWORKWHICHTHEYWHOFOUGHT\
HEREHAVETHUSFARSONOBLYADVANCEDITISRATHERFORUSTOBEHEREDEDICATEDTOTHE\
GREATTASKREMAININGBEFOREUSTHATFROMTHESEHONOREDDEADWETAKEINCREASEDDEVOTION\
TOTHATCAUSEFORWHICHTHEYGAVETHELASTFULLMEASUREOFDEVOTIONTHATWEHEREHIGHLY\
RESOLVETHATTHESEDEADSHALLNOTHAVEDIEDINVAINTHATTHISNATIONUNDERGODSHALL\
HAVEANEWBIRTHOFFREEDOMANDTHATGOVERNMENTOFTHEPEOPLEBYTHEPEOPLEFORTHE\
PEOPLESHALLNOTPERISHFROMTHEEARTH";

fn reference() -> LetterSequence {
    LetterSequence::from_text(REFERENCE_TEXT).unwrap()
}

#[test]
fn reference_text_has_english_coincidence() {
    let ic = index_of_coincidence(&reference()).unwrap();
    assert!(ic > 0.060 && ic <= 0.080, "IC was {ic}");
}

#[test]
fn caesar_shift_recovered_for_every_shift() {
    let model = FrequencyModel::english();
    let plain = reference();
    for shift in 0..26u8 {
        let key = LetterSequence::from_indices(vec![shift]).unwrap();
        let ciphertext = cipher::encrypt(&plain, &key).unwrap();
        let fit = recover_shift(&ciphertext, &model).unwrap();
        assert_eq!(fit.shift, shift, "failed at shift {shift}");
    }
}

#[test]
fn key_length_of_unencrypted_text_is_one() {
    let model = FrequencyModel::english();
    assert_eq!(find_key_length(&reference(), &model).unwrap(), 1);
}

#[test]
fn key_length_three_found_for_key_of_three() {
    let model = FrequencyModel::english();
    let key = LetterSequence::from_text("KEY").unwrap();
    let ciphertext = cipher::encrypt(&reference(), &key).unwrap();
    assert_eq!(find_key_length(&ciphertext, &model).unwrap(), 3);
}

#[test]
fn key_recovered_exactly_at_known_period() {
    let model = FrequencyModel::english();
    let key = LetterSequence::from_text("KEY").unwrap();
    let ciphertext = cipher::encrypt(&reference(), &key).unwrap();
    let recovered = recover_key(&ciphertext, 3, &model).unwrap();
    assert_eq!(recovered.key.to_string(), "KEY");
    assert_eq!(recovered.column_scores.len(), 3);
    // Columns decrypted with the true key sit close to the reference table.
    assert!(recovered.worst_score() < 0.01);
}

#[test]
fn full_attack_recovers_a_five_letter_key() {
    let model = FrequencyModel::english();
    let key = LetterSequence::from_text("LEMON").unwrap();
    let ciphertext = cipher::encrypt(&reference(), &key).unwrap();

    let recovered = break_cipher(&ciphertext, &model).unwrap();
    assert_eq!(recovered.key.to_string(), "LEMON");

    let plain = cipher::decrypt(&ciphertext, &recovered.key).unwrap();
    assert_eq!(plain.to_string(), REFERENCE_TEXT);
}

#[test]
fn attack_on_flat_input_reports_period_not_found() {
    let model = FrequencyModel::english();
    let indices: Vec<u8> = (0..26u8).cycle().take(104).collect();
    let seq = LetterSequence::from_indices(indices).unwrap();
    assert!(matches!(
        break_cipher(&seq, &model),
        Err(AnalysisError::PeriodNotFound { .. })
    ));
}
