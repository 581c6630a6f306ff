use ilforge_blob::elem;

use crate::descriptor::{LocalVariableDescriptor, NamedTypeRef, PrimitiveKind, TypeDescriptor};
use crate::encode::{
    encode_locals, encode_type, local_signature, return_signature, type_signature,
};
use crate::error::EncodeError;
use crate::resolver::ModuleTypeTable;

fn int32() -> TypeDescriptor {
    TypeDescriptor::Primitive(PrimitiveKind::Int32)
}

fn void() -> TypeDescriptor {
    TypeDescriptor::Primitive(PrimitiveKind::Void)
}

#[test]
fn true_primitives_are_marker_plus_code() {
    let table = ModuleTypeTable::new();
    for kind in [
        PrimitiveKind::Boolean,
        PrimitiveKind::Char,
        PrimitiveKind::SByte,
        PrimitiveKind::Byte,
        PrimitiveKind::Int16,
        PrimitiveKind::UInt16,
        PrimitiveKind::Int32,
        PrimitiveKind::UInt32,
        PrimitiveKind::Int64,
        PrimitiveKind::UInt64,
        PrimitiveKind::Single,
        PrimitiveKind::Double,
        PrimitiveKind::IntPtr,
        PrimitiveKind::UIntPtr,
    ] {
        let bytes = type_signature(&TypeDescriptor::Primitive(kind), &table).unwrap();
        assert_eq!(bytes, vec![elem::PRIM, kind.code()]);
    }
}

#[test]
fn string_and_object_use_dedicated_markers() {
    let table = ModuleTypeTable::new();
    let string = type_signature(&TypeDescriptor::Primitive(PrimitiveKind::String), &table);
    let object = type_signature(&TypeDescriptor::Primitive(PrimitiveKind::Object), &table);
    assert_eq!(string.unwrap(), vec![elem::STRING]);
    assert_eq!(object.unwrap(), vec![elem::OBJECT]);
}

#[test]
fn void_is_only_legal_in_return_position() {
    let table = ModuleTypeTable::new();
    assert_eq!(return_signature(&void(), &table).unwrap(), vec![elem::VOID]);
    assert_eq!(
        type_signature(&void(), &table),
        Err(EncodeError::VoidNotAllowed)
    );
    // nested void is just as illegal
    assert_eq!(
        type_signature(&TypeDescriptor::pointer(void()), &table),
        Err(EncodeError::VoidNotAllowed)
    );
    assert_eq!(
        type_signature(&TypeDescriptor::szarray(void()), &table),
        Err(EncodeError::VoidNotAllowed)
    );
}

#[test]
fn byref_is_rejected_outside_return_and_accepted_there() {
    let table = ModuleTypeTable::new();
    let byref_int = TypeDescriptor::byref(int32());

    assert_eq!(
        type_signature(&byref_int, &table),
        Err(EncodeError::InvalidByRefPlacement)
    );

    let mut expected = vec![elem::BYREF];
    expected.extend(type_signature(&int32(), &table).unwrap());
    assert_eq!(return_signature(&byref_int, &table).unwrap(), expected);
}

#[test]
fn byref_never_nests() {
    let table = ModuleTypeTable::new();
    let doubled = TypeDescriptor::byref(TypeDescriptor::byref(int32()));
    assert_eq!(
        return_signature(&doubled, &table),
        Err(EncodeError::InvalidByRefPlacement)
    );
    // and never inside another shape
    let inside_array = TypeDescriptor::szarray(TypeDescriptor::byref(int32()));
    assert_eq!(
        type_signature(&inside_array, &table),
        Err(EncodeError::InvalidByRefPlacement)
    );
}

#[test]
fn pointers_nest() {
    let table = ModuleTypeTable::new();
    let double_pointer = TypeDescriptor::pointer(TypeDescriptor::pointer(int32()));
    assert_eq!(
        type_signature(&double_pointer, &table).unwrap(),
        vec![elem::PTR, elem::PTR, elem::PRIM, elem::I4]
    );
}

#[test]
fn szarray_and_rank_one_array_differ() {
    let table = ModuleTypeTable::new();
    let szarray = type_signature(&TypeDescriptor::szarray(int32()), &table).unwrap();
    let array = type_signature(&TypeDescriptor::array(int32(), 1), &table).unwrap();

    assert_eq!(szarray, vec![elem::SZARRAY, elem::PRIM, elem::I4]);
    assert_eq!(
        array,
        vec![elem::ARRAY, elem::PRIM, elem::I4, 1, 0, 1, 0]
    );
    assert_ne!(szarray, array);
}

#[test]
fn multi_dim_array_shape_is_rank_no_sizes_zero_bounds() {
    let table = ModuleTypeTable::new();
    let array = TypeDescriptor::array(TypeDescriptor::Primitive(PrimitiveKind::Double), 3);
    assert_eq!(
        type_signature(&array, &table).unwrap(),
        // marker, element, rank=3, sizes=[], lower bounds=[0,0,0]
        vec![elem::ARRAY, elem::PRIM, elem::R8, 3, 0, 3, 0, 0, 0]
    );
}

#[test]
fn named_type_embeds_handle_and_flag() {
    let table = ModuleTypeTable::new();
    let class = TypeDescriptor::class(NamedTypeRef::new("System.Text", "StringBuilder"));
    let value = TypeDescriptor::value_type(NamedTypeRef::new("System", "Decimal"));

    // first resolution takes row 1, second takes row 2
    assert_eq!(
        type_signature(&class, &table).unwrap(),
        vec![elem::CLASS, 0x04, 0x00]
    );
    assert_eq!(
        type_signature(&value, &table).unwrap(),
        vec![elem::CLASS, 0x08, 0x01]
    );
}

#[test]
fn repeated_references_reuse_the_same_handle_bytes() {
    let table = ModuleTypeTable::new();
    let ty = TypeDescriptor::class(NamedTypeRef::new("N", "Widget"));
    let first = type_signature(&ty, &table).unwrap();
    let second = type_signature(&ty, &table).unwrap();
    assert_eq!(first, second);
    assert_eq!(table.len(), 1);
}

#[test]
fn generic_instantiation_layout() {
    let table = ModuleTypeTable::new();
    let dictionary = NamedTypeRef::generic("System.Collections.Generic", "Dictionary", 2);
    let ty = TypeDescriptor::generic(
        dictionary,
        vec![TypeDescriptor::GenericTypeParameter(0), int32()],
        true,
    );
    assert_eq!(
        type_signature(&ty, &table).unwrap(),
        vec![
            elem::GENERICINST,
            0x04, // handle: type-def row 1
            0x01, // value-type flag
            0x02, // argument count
            elem::VAR,
            0x00,
            elem::PRIM,
            elem::I4,
        ]
    );
}

#[test]
fn generic_arguments_recurse_fully() {
    let table = ModuleTypeTable::new();
    let list = NamedTypeRef::generic("System.Collections.Generic", "List", 1);
    let ty = TypeDescriptor::generic(
        list,
        vec![TypeDescriptor::szarray(TypeDescriptor::Primitive(
            PrimitiveKind::String,
        ))],
        false,
    );
    assert_eq!(
        type_signature(&ty, &table).unwrap(),
        vec![elem::GENERICINST, 0x04, 0x00, 0x01, elem::SZARRAY, elem::STRING]
    );
}

#[test]
fn method_parameter_placeholders_keep_their_own_marker() {
    let table = ModuleTypeTable::new();
    let list = NamedTypeRef::generic("System.Collections.Generic", "List", 1);
    let ty = TypeDescriptor::generic(
        list,
        vec![TypeDescriptor::GenericMethodParameter(1)],
        false,
    );
    assert_eq!(
        type_signature(&ty, &table).unwrap(),
        vec![elem::GENERICINST, 0x04, 0x00, 0x01, elem::MVAR, 0x01]
    );
}

#[test]
fn generic_arity_mismatch_appends_nothing() {
    let table = ModuleTypeTable::new();
    let dictionary = NamedTypeRef::generic("System.Collections.Generic", "Dictionary", 2);
    let ty = TypeDescriptor::generic(dictionary.clone(), vec![int32()], true);

    let mut out = vec![0xAB];
    assert_eq!(
        encode_type(&ty, &table, &mut out),
        Err(EncodeError::GenericArityMismatch {
            reference: dictionary,
            declared: 2,
            supplied: 1,
        })
    );
    // checked before the node's first byte, so the buffer is untouched
    assert_eq!(out, vec![0xAB]);
}

#[test]
fn generic_parameter_positions_are_compressed() {
    let table = ModuleTypeTable::new();
    let var = type_signature(&TypeDescriptor::GenericTypeParameter(0x80), &table).unwrap();
    assert_eq!(var, vec![elem::VAR, 0x80, 0x80]);

    let mvar = type_signature(&TypeDescriptor::GenericMethodParameter(3), &table).unwrap();
    assert_eq!(mvar, vec![elem::MVAR, 0x03]);
}

#[test]
fn locals_encode_in_index_order() {
    let table = ModuleTypeTable::new();
    let locals = [
        LocalVariableDescriptor::new(int32()),
        LocalVariableDescriptor::pinned(TypeDescriptor::byref(TypeDescriptor::Primitive(
            PrimitiveKind::String,
        ))),
    ];

    let mut out = Vec::new();
    encode_locals(&locals, &table, &mut out).unwrap();
    assert_eq!(
        out,
        vec![elem::PRIM, elem::I4, elem::PINNED, elem::BYREF, elem::STRING]
    );
}

#[test]
fn pinned_applies_without_byref() {
    let table = ModuleTypeTable::new();
    let locals = [LocalVariableDescriptor::pinned(TypeDescriptor::szarray(
        TypeDescriptor::Primitive(PrimitiveKind::Byte),
    ))];
    let mut out = Vec::new();
    encode_locals(&locals, &table, &mut out).unwrap();
    assert_eq!(out, vec![elem::PINNED, elem::SZARRAY, elem::PRIM, elem::U1]);
}

#[test]
fn local_signature_frames_the_entries() {
    let table = ModuleTypeTable::new();
    let locals = [
        LocalVariableDescriptor::new(int32()),
        LocalVariableDescriptor::new(TypeDescriptor::byref(int32())),
    ];
    assert_eq!(
        local_signature(&locals, &table).unwrap(),
        vec![
            elem::LOCAL_SIG,
            0x02,
            elem::PRIM,
            elem::I4,
            elem::BYREF,
            elem::PRIM,
            elem::I4,
        ]
    );
}

#[test]
fn empty_local_signature_is_just_the_frame() {
    let table = ModuleTypeTable::new();
    assert_eq!(
        local_signature(&[], &table).unwrap(),
        vec![elem::LOCAL_SIG, 0x00]
    );
}

#[test]
fn locals_reject_nested_byref() {
    let table = ModuleTypeTable::new();
    let locals = [LocalVariableDescriptor::new(TypeDescriptor::byref(
        TypeDescriptor::byref(int32()),
    ))];
    let mut out = Vec::new();
    assert_eq!(
        encode_locals(&locals, &table, &mut out),
        Err(EncodeError::InvalidByRefPlacement)
    );
}

#[test]
fn frozen_table_fails_unknown_references() {
    let table = ModuleTypeTable::new();
    let known = NamedTypeRef::new("N", "Known");
    type_signature(&TypeDescriptor::class(known.clone()), &table).unwrap();
    table.freeze();

    // already-resolved references keep working
    type_signature(&TypeDescriptor::class(known), &table).unwrap();

    let unknown = NamedTypeRef::new("N", "Unknown");
    assert_eq!(
        type_signature(&TypeDescriptor::class(unknown.clone()), &table),
        Err(EncodeError::UnknownType(unknown))
    );
}
